//! Loose date parsing for article metadata.
//!
//! Article dates are free-form strings written by hand. They are only used
//! for ordering and display, so parsing never fails loudly: anything that
//! does not look like a date sorts as the Unix epoch.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Naive date-time layouts accepted in addition to RFC 3339.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Parse a metadata date into milliseconds since the Unix epoch.
///
/// Naive values (no offset) are read as UTC.
pub fn parse_timestamp(input: &str) -> Option<i64> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Sort key for a metadata date: unparsable dates count as epoch zero.
#[inline]
pub fn sort_key(input: &str) -> i64 {
    parse_timestamp(input).unwrap_or(0)
}

/// Format a metadata date as `YYYY/MM/DD` for terminal output.
///
/// Falls back to the raw string when it cannot be parsed.
pub fn display_date(input: &str) -> String {
    parse_timestamp(input)
        .and_then(DateTime::from_timestamp_millis)
        .map_or_else(|| input.to_owned(), |dt| dt.format("%Y/%m/%d").to_string())
}
