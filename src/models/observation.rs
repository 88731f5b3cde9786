use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of a trend query: how many records fell on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub count: u64,
}

impl Observation {
    pub fn new(date: NaiveDate, count: u64) -> Self {
        Self { date, count }
    }
}

/// One row of a grouped category query, e.g. records per venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: Option<String>,
    pub count: u64,
}

impl CategoryCount {
    pub fn new(label: Option<&str>, count: u64) -> Self {
        Self {
            label: label.map(str::to_string),
            count,
        }
    }

    /// The label if present and non-blank.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_label_is_absent() {
        assert_eq!(CategoryCount::new(Some("Nakuru"), 3).label(), Some("Nakuru"));
        assert_eq!(CategoryCount::new(Some("  "), 3).label(), None);
        assert_eq!(CategoryCount::new(None, 3).label(), None);
    }
}
