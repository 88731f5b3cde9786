use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::{CategoryCount, Observation};
use crate::readers::text::decode_text;

/// Reads grouped query rows exported as CSV: `date,count` for trends and
/// `label,count` for category breakdowns.
pub struct ObservationReader {
    has_headers: bool,
}

impl ObservationReader {
    pub fn new() -> Self {
        Self { has_headers: true }
    }

    pub fn with_headers(has_headers: bool) -> Self {
        Self { has_headers }
    }

    pub fn read_observations(&self, path: &Path) -> Result<Vec<Observation>> {
        let bytes = std::fs::read(path)?;
        self.parse_observations(&bytes)
    }

    pub fn parse_observations(&self, bytes: &[u8]) -> Result<Vec<Observation>> {
        self.deserialize_rows(bytes)
    }

    pub fn read_category_counts(&self, path: &Path) -> Result<Vec<CategoryCount>> {
        let bytes = std::fs::read(path)?;
        self.parse_category_counts(&bytes)
    }

    pub fn parse_category_counts(&self, bytes: &[u8]) -> Result<Vec<CategoryCount>> {
        self.deserialize_rows(bytes)
    }

    fn deserialize_rows<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<Vec<T>> {
        let text = decode_text(bytes);
        let mut reader = ReaderBuilder::new()
            .has_headers(self.has_headers)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for row in reader.deserialize::<T>() {
            rows.push(row?);
        }
        Ok(rows)
    }
}

impl Default for ObservationReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_observations() -> Result<()> {
        let csv = "date,count\n2024-01-05, 3\n2024-01-06,2\n";
        let observations = ObservationReader::new().parse_observations(csv.as_bytes())?;

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(observations[0].count, 3);
        Ok(())
    }

    #[test]
    fn test_parse_without_headers() -> Result<()> {
        let csv = "2024-01-05,3\n";
        let observations = ObservationReader::with_headers(false).parse_observations(csv.as_bytes())?;
        assert_eq!(observations.len(), 1);
        Ok(())
    }

    #[test]
    fn test_bad_date_is_an_error() {
        let csv = "date,count\n05/01/2024,3\n";
        assert!(ObservationReader::new().parse_observations(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_read_category_counts_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "label,count")?;
        writeln!(temp_file, "Ahero,5")?;
        writeln!(temp_file, ",2")?;

        let rows = ObservationReader::new().read_category_counts(temp_file.path())?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label.as_deref(), Some("Ahero"));
        assert_eq!(rows[1].label, None);
        assert_eq!(rows[1].count, 2);
        Ok(())
    }
}
