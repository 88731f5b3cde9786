use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::Result;
use crate::models::{DateRange, Granularity, Observation, Series};

/// Groups dated counts into time buckets for a trend chart.
///
/// Labels are ordered as plain strings. That is chronological for daily,
/// weekly-within-a-year and yearly keys, but `Mon YYYY` monthly labels sort
/// alphabetically by month name (`Apr 2024` before `Jan 2024`). Chart
/// consumers rely on that order, so it is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendAggregator {
    granularity: Granularity,
    range: Option<DateRange>,
}

impl TrendAggregator {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            range: None,
        }
    }

    /// Zero-fill every bucket the range touches.
    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn aggregate(&self, observations: &[Observation]) -> Series {
        let mut buckets: BTreeMap<String, u64> = BTreeMap::new();

        for observation in observations {
            *buckets
                .entry(self.granularity.label(observation.date))
                .or_insert(0) += observation.count;
        }

        let observed = buckets.len();
        if let Some(range) = self.range {
            for date in range.walk(self.granularity) {
                buckets.entry(self.granularity.label(date)).or_insert(0);
            }
        }

        debug!(
            granularity = %self.granularity,
            observations = observations.len(),
            buckets = buckets.len(),
            gap_filled = buckets.len() - observed,
            "aggregated trend series"
        );

        buckets.into_iter().collect()
    }
}

/// Aggregate `observations` into a trend series.
///
/// Gap-filling happens only when both bounds are given; a reversed range is
/// rejected before any bucket is walked.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use irrigation_insights::aggregate_trend;
/// use irrigation_insights::models::Granularity;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1);
/// let end = NaiveDate::from_ymd_opt(2024, 3, 1);
/// let series = aggregate_trend(&[], Granularity::Monthly, start, end).unwrap();
/// assert_eq!(series.labels, vec!["Feb 2024", "Jan 2024", "Mar 2024"]);
/// assert_eq!(series.values, vec![0, 0, 0]);
/// ```
pub fn aggregate_trend(
    observations: &[Observation],
    granularity: Granularity,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Series> {
    let mut aggregator = TrendAggregator::new(granularity);
    if let Some(range) = DateRange::from_bounds(start, end)? {
        aggregator = aggregator.with_range(range);
    }
    Ok(aggregator.aggregate(observations))
}
