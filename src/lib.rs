pub mod analyzers;
pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod settings;
pub mod utils;

pub use analyzers::aggregate_trend;
pub use error::{InsightsError, Result};
pub use models::{Coordinate, Granularity, Observation, Series};
pub use utils::coordinates::{parse_coordinates, ParseError};
