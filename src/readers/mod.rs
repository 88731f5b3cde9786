pub mod gps_reader;
pub mod observation_reader;
pub mod scheme_reader;
pub mod text;

pub use gps_reader::{GpsEntry, GpsReader};
pub use observation_reader::ObservationReader;
pub use scheme_reader::SchemeReader;
pub use text::decode_text;
