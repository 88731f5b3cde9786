use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::InsightsError;
use crate::models::{CategoryCount, Series};
use crate::utils::constants::NO_EVENT_LABEL;

/// Which grouped query a breakdown chart is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakdownKind {
    /// Venue comparison: unnamed venues are left off the chart.
    Venue,
    /// Event distribution: unnamed events are grouped as "No Event".
    Event,
}

impl BreakdownKind {
    pub fn build(&self, rows: &[CategoryCount]) -> Series {
        match self {
            BreakdownKind::Venue => venue_breakdown(rows),
            BreakdownKind::Event => event_breakdown(rows),
        }
    }
}

impl fmt::Display for BreakdownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakdownKind::Venue => f.write_str("venue"),
            BreakdownKind::Event => f.write_str("event"),
        }
    }
}

impl FromStr for BreakdownKind {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "venue" | "venues" => Ok(BreakdownKind::Venue),
            "event" | "events" => Ok(BreakdownKind::Event),
            _ => Err(InsightsError::InvalidBreakdownKind(s.to_string())),
        }
    }
}

/// Series of counts per venue in query order, skipping rows with no venue.
pub fn venue_breakdown(rows: &[CategoryCount]) -> Series {
    rows.iter()
        .filter_map(|row| row.label().map(|label| (label, row.count)))
        .collect()
}

/// Series of counts per event in query order, labelling missing events.
pub fn event_breakdown(rows: &[CategoryCount]) -> Series {
    rows.iter()
        .map(|row| (row.label().unwrap_or(NO_EVENT_LABEL), row.count))
        .collect()
}
