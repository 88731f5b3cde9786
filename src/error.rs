use chrono::NaiveDate;
use thiserror::Error;

use crate::utils::coordinates::ParseError;

pub type Result<T> = std::result::Result<T, InsightsError>;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Coordinate(#[from] ParseError),

    #[error("End date must be after start date (start: {start}, end: {end})")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Unknown time period '{0}'. Expected one of: daily, weekly, monthly, yearly")]
    InvalidGranularity(String),

    #[error("Unknown breakdown kind '{0}'. Expected one of: venue, event")]
    InvalidBreakdownKind(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Missing required data: {0}")]
    MissingData(String),

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
