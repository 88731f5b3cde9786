use chrono::NaiveDate;

use crate::utils::constants::DATE_FORMAT;

/// Parse a `YYYY-MM-DD` form value, yielding `None` for blank or malformed input.
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT).ok()
}

/// Parse an optional query parameter; absent and malformed values are both `None`.
pub fn parse_optional_date(date_str: Option<&str>) -> Option<NaiveDate> {
    date_str.and_then(parse_date)
}
