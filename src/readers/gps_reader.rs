use std::path::Path;

use csv::ReaderBuilder;
use serde::Serialize;

use crate::error::{InsightsError, Result};
use crate::readers::text::decode_text;
use crate::utils::constants::DEFAULT_GPS_COLUMN;

/// A raw coordinate string and the 1-based data row it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GpsEntry {
    pub row: usize,
    pub text: String,
}

/// Pulls the GPS column out of a submissions export.
pub struct GpsReader {
    column: String,
}

impl GpsReader {
    pub fn new() -> Self {
        Self {
            column: DEFAULT_GPS_COLUMN.to_string(),
        }
    }

    pub fn with_column(column: &str) -> Self {
        Self {
            column: column.to_string(),
        }
    }

    pub fn read_entries(&self, path: &Path) -> Result<Vec<GpsEntry>> {
        let bytes = std::fs::read(path)?;
        self.parse_entries(&bytes)
    }

    pub fn parse_entries(&self, bytes: &[u8]) -> Result<Vec<GpsEntry>> {
        let text = decode_text(bytes);
        // Fields are left untrimmed; the coordinate parser handles whitespace.
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let index = reader
            .headers()?
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(&self.column))
            .ok_or_else(|| {
                InsightsError::MissingData(format!("No '{}' column in input", self.column))
            })?;

        let mut entries = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            entries.push(GpsEntry {
                row: i + 1,
                text: record.get(index).unwrap_or_default().to_string(),
            });
        }

        Ok(entries)
    }
}

impl Default for GpsReader {
    fn default() -> Self {
        Self::new()
    }
}
