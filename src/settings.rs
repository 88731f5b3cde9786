use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::Level;

use crate::error::{InsightsError, Result};
use crate::models::Granularity;
use crate::utils::constants::{
    DEFAULT_GPS_COLUMN, DEFAULT_GRANULARITY, DEFAULT_LOG_LEVEL, ENV_PREFIX,
};

/// Runtime settings, layered as: built-in defaults, optional config file,
/// `IRRIGATION_*` environment variables, then `key=value` overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub default_granularity: Granularity,
    pub log_level: String,
    pub gps_column: String,
}

impl Settings {
    pub fn load(config_file: Option<&Path>, overrides: &[String]) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("default_granularity", DEFAULT_GRANULARITY)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("gps_column", DEFAULT_GPS_COLUMN)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        for assignment in overrides {
            let (key, value) = assignment.split_once('=').ok_or_else(|| {
                InsightsError::Config(format!(
                    "missing '=' in setting override: {}",
                    assignment
                ))
            })?;
            builder = builder.set_override(key.trim(), value.trim())?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.log_level()?;
        Ok(settings)
    }

    pub fn log_level(&self) -> Result<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| InsightsError::Config(format!("invalid log level: {}", self.log_level)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_granularity: Granularity::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            gps_column: DEFAULT_GPS_COLUMN.to_string(),
        }
    }
}
