use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};
use validator::Validate;

use crate::error::{InsightsError, Result};
use crate::readers::GpsEntry;
use crate::utils::coordinates::parse_coordinates;

/// Result of parsing one submitted coordinate string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GpsOutcome {
    Parsed {
        row: usize,
        latitude: f64,
        longitude: f64,
        in_range: bool,
    },
    Failed {
        row: usize,
        error: String,
    },
}

impl GpsOutcome {
    pub fn row(&self) -> usize {
        match self {
            GpsOutcome::Parsed { row, .. } | GpsOutcome::Failed { row, .. } => *row,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, GpsOutcome::Parsed { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub parsed: usize,
    pub failed: usize,
    pub out_of_range: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[GpsOutcome]) -> Self {
        let mut summary = BatchSummary {
            total: outcomes.len(),
            ..Default::default()
        };
        for outcome in outcomes {
            match outcome {
                GpsOutcome::Parsed { in_range, .. } => {
                    summary.parsed += 1;
                    if !in_range {
                        summary.out_of_range += 1;
                    }
                }
                GpsOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }
}

/// Parses many coordinate strings on a bounded rayon pool.
pub struct GpsBatchProcessor {
    max_workers: usize,
}

impl GpsBatchProcessor {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
        }
    }

    /// Parse every entry, keeping input order. A failing row never aborts the batch.
    pub fn process(&self, entries: &[GpsEntry]) -> Result<Vec<GpsOutcome>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| InsightsError::Config(e.to_string()))?;

        let outcomes: Vec<GpsOutcome> =
            pool.install(|| entries.par_iter().map(Self::parse_entry).collect());

        let summary = BatchSummary::from_outcomes(&outcomes);
        info!(
            total = summary.total,
            parsed = summary.parsed,
            failed = summary.failed,
            out_of_range = summary.out_of_range,
            "parsed GPS batch"
        );

        Ok(outcomes)
    }

    fn parse_entry(entry: &GpsEntry) -> GpsOutcome {
        match parse_coordinates(&entry.text) {
            Ok(coordinate) => {
                let in_range = coordinate.validate().is_ok();
                if !in_range {
                    warn!(row = entry.row, %coordinate, "coordinate outside valid range");
                }
                GpsOutcome::Parsed {
                    row: entry.row,
                    latitude: coordinate.latitude(),
                    longitude: coordinate.longitude(),
                    in_range,
                }
            }
            Err(e) => GpsOutcome::Failed {
                row: entry.row,
                error: e.to_string(),
            },
        }
    }
}

impl Default for GpsBatchProcessor {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}
