use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::warn;
use validator::Validate;

use crate::error::Result;
use crate::models::SchemeRecord;
use crate::readers::text::decode_text;

/// Reads irrigation scheme rows exported as CSV with a header line.
pub struct SchemeReader {
    strict: bool,
}

impl SchemeReader {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// In strict mode a scheme failing validation aborts the read instead of
    /// being skipped.
    pub fn with_strict_validation(strict: bool) -> Self {
        Self { strict }
    }

    pub fn read_schemes(&self, path: &Path) -> Result<Vec<SchemeRecord>> {
        let bytes = std::fs::read(path)?;
        self.parse_schemes(&bytes)
    }

    pub fn parse_schemes(&self, bytes: &[u8]) -> Result<Vec<SchemeRecord>> {
        let text = decode_text(bytes);
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let mut schemes = Vec::new();
        for row in reader.deserialize() {
            let scheme: SchemeRecord = row?;
            if let Err(e) = scheme.validate() {
                if self.strict {
                    return Err(e.into());
                }
                warn!(scheme_id = scheme.scheme_id, "skipping invalid scheme: {}", e);
                continue;
            }
            schemes.push(scheme);
        }

        Ok(schemes)
    }
}

impl Default for SchemeReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMES_CSV: &str = "\
scheme_id,scheme_name,subcounty,water_availability,infrastructure_status,application_type,current_status,registration_status
1,Perkerra,Marigat,Adequate,Fully functional,Furrow,Active,Irrigation water user association
2,Kapkuikui,Mogotio,,Needs repair,,Dormant,
3,,Mogotio,Seasonal,,,,
";

    #[test]
    fn test_parse_schemes_skips_invalid() -> Result<()> {
        let schemes = SchemeReader::new().parse_schemes(SCHEMES_CSV.as_bytes())?;

        assert_eq!(schemes.len(), 2);
        assert_eq!(schemes[0].scheme_name, "Perkerra");
        assert_eq!(schemes[0].water_availability.as_deref(), Some("Adequate"));
        assert_eq!(schemes[1].water_availability, None);
        assert_eq!(schemes[1].registration_status, None);
        Ok(())
    }

    #[test]
    fn test_strict_validation_fails() {
        let result = SchemeReader::with_strict_validation(true).parse_schemes(SCHEMES_CSV.as_bytes());
        assert!(result.is_err());
    }
}
