pub mod coordinate;
pub mod date_range;
pub mod granularity;
pub mod observation;
pub mod scheme;
pub mod series;

pub use coordinate::Coordinate;
pub use date_range::DateRange;
pub use granularity::Granularity;
pub use observation::{CategoryCount, Observation};
pub use scheme::SchemeRecord;
pub use series::Series;
