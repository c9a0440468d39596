//! Date and datetime parsing for text columns.
//!
//! A text column is temporal only if every non-missing value parses. Parsing
//! returns a `Result` so the classifier can fall back to a categorical
//! reading without swallowing unrelated failures.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// A value that is not a recognised date or datetime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a recognised date or datetime")]
pub struct TemporalParseError {
    pub value: String,
}

const DATETIME_FORMATS: [&str; 15] = [
    "%Y-%m-%dT%H:%M:%S%.f", // With fractional seconds
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d-%b-%Y %H:%M:%S", // 15-Jan-2024 10:30:00
    "%d-%b-%Y %H:%M",
    "%m/%d/%Y %H:%M:%S", // US
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S", // European
    "%d/%m/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 13] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%b-%Y",  // 15-Jan-2024
    "%d-%B-%Y",  // 15-January-2024
    "%m/%d/%Y",  // US: 01/15/2024
    "%d/%m/%Y",  // European: 15/01/2024
    "%d.%m.%Y",  // German: 15.01.2024
    "%b %d, %Y", // Jan 15, 2024
    "%B %d, %Y", // January 15, 2024
    "%d %b %Y",  // 15 Jan 2024
    "%d %B %Y",  // 15 January 2024
    "%Y-%b-%d",  // 2024-Jan-15
    "%d-%m-%Y",  // 15-01-2024
];

/// Parses one value as a date or datetime.
///
/// Month-first is preferred over day-first for slash-separated dates.
/// Offsets in RFC 3339 input are normalised to UTC. Bare years and compact
/// `YYYYMMDD` numbers are not accepted since they are indistinguishable
/// from plain numbers.
///
/// ```
/// use dp_core::parse_datetime;
///
/// let dt = parse_datetime("2018-07-29").unwrap();
/// assert_eq!(dt.to_string(), "2018-07-29 00:00:00");
/// assert!(parse_datetime("male").is_err());
/// ```
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, TemporalParseError> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_utc());
    }

    for fmt in &DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }

    for fmt in &DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Ok(d.and_time(NaiveTime::MIN));
        }
    }

    Err(TemporalParseError {
        value: value.to_string(),
    })
}

/// Parses a whole text column, keeping missing entries missing.
///
/// Fails on the first value that does not parse.
pub fn parse_column(
    values: &[Option<String>],
) -> Result<Vec<Option<NaiveDateTime>>, TemporalParseError> {
    values
        .iter()
        .map(|value| value.as_deref().map(parse_datetime).transpose())
        .collect()
}
