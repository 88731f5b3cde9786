use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InsightsError;
use crate::utils::constants::{DATE_FORMAT, MONTH_LABEL_FORMAT, YEAR_LABEL_FORMAT};

/// Time bucket used to group observations on a trend chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Yearly => "yearly",
        }
    }

    /// Bucket key for `date`: `2024-01-05`, `W01 2024`, `Jan 2024` or `2024`.
    pub fn label(&self, date: NaiveDate) -> String {
        match self {
            Granularity::Daily => date.format(DATE_FORMAT).to_string(),
            Granularity::Weekly => {
                let week = date.iso_week();
                format!("W{:02} {}", week.week(), week.year())
            }
            Granularity::Monthly => date.format(MONTH_LABEL_FORMAT).to_string(),
            Granularity::Yearly => date.format(YEAR_LABEL_FORMAT).to_string(),
        }
    }

    /// Next date visited when walking a range. Monthly and yearly steps snap
    /// to the first day of the following period. `None` past chrono's range.
    pub fn step(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Granularity::Daily => date.succ_opt(),
            Granularity::Weekly => date.checked_add_days(Days::new(7)),
            Granularity::Monthly => {
                if date.month() == 12 {
                    NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
                }
            }
            Granularity::Yearly => NaiveDate::from_ymd_opt(date.year() + 1, 1, 1),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Granularity::Daily),
            "weekly" => Ok(Granularity::Weekly),
            "monthly" => Ok(Granularity::Monthly),
            "yearly" => Ok(Granularity::Yearly),
            _ => Err(InsightsError::InvalidGranularity(s.to_string())),
        }
    }
}
