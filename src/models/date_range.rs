use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{InsightsError, Result};
use crate::models::Granularity;

/// Inclusive date window with `start <= end` guaranteed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(InsightsError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range only when both bounds are supplied.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Option<Self>> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end).map(Some),
            _ => Ok(None),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// Dates visited when stepping from `start` to `end` by `granularity`.
    pub fn walk(&self, granularity: Granularity) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |date| granularity.step(*date))
            .take_while(move |date| *date <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rejects_reversed_range() {
        let err = DateRange::new(date(2024, 3, 1), date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, InsightsError::InvalidDateRange { .. }));
        assert!(DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).is_ok());
    }

    #[test]
    fn test_from_bounds() {
        assert_eq!(DateRange::from_bounds(None, Some(date(2024, 1, 1))).unwrap(), None);
        assert_eq!(DateRange::from_bounds(Some(date(2024, 1, 1)), None).unwrap(), None);
        assert!(DateRange::from_bounds(Some(date(2024, 2, 1)), Some(date(2024, 1, 1))).is_err());
        let range = DateRange::from_bounds(Some(date(2024, 1, 1)), Some(date(2024, 2, 1)))
            .unwrap()
            .unwrap();
        assert!(range.contains(date(2024, 1, 15)));
        assert!(!range.contains(date(2024, 2, 2)));
    }

    #[test]
    fn test_walk_monthly_snaps_to_first() {
        let range = DateRange::new(date(2024, 1, 15), date(2024, 3, 1)).unwrap();
        let visited: Vec<NaiveDate> = range.walk(Granularity::Monthly).collect();
        assert_eq!(visited, vec![date(2024, 1, 15), date(2024, 2, 1), date(2024, 3, 1)]);
    }

    #[test]
    fn test_walk_is_inclusive() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 15)).unwrap();
        assert_eq!(range.walk(Granularity::Daily).count(), 15);
        assert_eq!(range.walk(Granularity::Weekly).count(), 3);
        assert_eq!(range.walk(Granularity::Yearly).count(), 1);
    }

    #[test]
    fn test_walk_terminates_at_calendar_end() {
        let range = DateRange::new(NaiveDate::MAX, NaiveDate::MAX).unwrap();
        assert_eq!(range.walk(Granularity::Daily).count(), 1);
    }
}
