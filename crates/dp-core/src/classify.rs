//! Variable type classification.
//!
//! Rules are checked in order and the first match wins:
//!
//! 1. no distinct value: `Empty`
//! 2. one distinct value, nothing missing: `Constant`
//! 3. all values distinct in a non-numeric column: `Unique`
//! 4. two distinct values, or one plus missing entries: `Binary`
//! 5. numeric storage (booleans included): `Interval`
//! 6. temporal storage: `Datetime`
//! 7. text where every value parses as a date: `Datetime`, else `Nominal`

use std::borrow::Cow;

use chrono::NaiveDateTime;
use dp_model::{ClassifiedType, ColumnValues};
use tracing::debug;

use crate::stats::ValueCounts;
use crate::temporal;

/// Outcome of classifying one column.
///
/// `Datetime` carries the temporal values, borrowed from a datetime column
/// or parsed from a text one.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification<'a> {
    Empty,
    Constant,
    Unique,
    Binary,
    Interval,
    Datetime(Cow<'a, [Option<NaiveDateTime>]>),
    Nominal,
}

impl Classification<'_> {
    pub fn classified_type(&self) -> ClassifiedType {
        match self {
            Classification::Empty => ClassifiedType::Empty,
            Classification::Constant => ClassifiedType::Constant,
            Classification::Unique => ClassifiedType::Unique,
            Classification::Binary => ClassifiedType::Binary,
            Classification::Interval => ClassifiedType::Interval,
            Classification::Datetime(_) => ClassifiedType::Datetime,
            Classification::Nominal => ClassifiedType::Nominal,
        }
    }
}

/// Classifies a column given its value counts.
pub fn classify<'a>(values: &'a ColumnValues, counts: &ValueCounts) -> Classification<'a> {
    let distinct = counts.distinct();
    let length = values.len();
    let has_missing = values.missing_count() > 0;
    let storage = values.storage_kind();

    if distinct == 0 {
        return Classification::Empty;
    }
    if distinct == 1 && !has_missing {
        return Classification::Constant;
    }
    if distinct == length && !storage.is_numeric() {
        return Classification::Unique;
    }
    if distinct == 2 || (distinct == 1 && has_missing) {
        return Classification::Binary;
    }
    if storage.is_numeric() {
        return Classification::Interval;
    }

    match values {
        ColumnValues::Datetime(stored) => {
            Classification::Datetime(Cow::Borrowed(stored.as_slice()))
        }
        ColumnValues::Text(text) => match temporal::parse_column(text) {
            Ok(parsed) => Classification::Datetime(Cow::Owned(parsed)),
            Err(err) => {
                debug!(error = %err, "text column is not temporal");
                Classification::Nominal
            }
        },
        _ => Classification::Nominal,
    }
}

/// Classifies a column, counting its values first.
pub fn classify_values(values: &ColumnValues) -> ClassifiedType {
    classify(values, &ValueCounts::from_values(values)).classified_type()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(values: &[Option<&str>]) -> ColumnValues {
        ColumnValues::Text(values.iter().map(|v| v.map(str::to_string)).collect())
    }

    #[test]
    fn test_empty() {
        assert_eq!(classify_values(&ColumnValues::Null(3)), ClassifiedType::Empty);
        assert_eq!(
            classify_values(&ColumnValues::Float(vec![None, Some(f64::NAN)])),
            ClassifiedType::Empty
        );
    }

    #[test]
    fn test_constant_becomes_binary_with_missing() {
        let constant = ColumnValues::Integer(vec![Some(1); 5]);
        assert_eq!(classify_values(&constant), ClassifiedType::Constant);

        let with_missing = ColumnValues::Integer(vec![Some(1), Some(1), None, Some(1)]);
        assert_eq!(classify_values(&with_missing), ClassifiedType::Binary);
    }

    #[test]
    fn test_unique_only_for_non_numeric() {
        let names = text(&[Some("Braund"), Some("Cumings"), Some("Heikkinen")]);
        assert_eq!(classify_values(&names), ClassifiedType::Unique);

        let ids = ColumnValues::Integer(vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
        assert_eq!(classify_values(&ids), ClassifiedType::Interval);
    }

    #[test]
    fn test_binary() {
        let booleans = ColumnValues::Boolean(vec![
            Some(true),
            Some(false),
            Some(true),
            Some(false),
            Some(false),
        ]);
        assert_eq!(classify_values(&booleans), ClassifiedType::Binary);

        let flags = ColumnValues::Integer(
            [1, 0, 0, 0, 1, 1, 1, 0].into_iter().map(Some).collect(),
        );
        assert_eq!(classify_values(&flags), ClassifiedType::Binary);
    }

    #[test]
    fn test_text_dates() {
        let dates = text(&[
            Some("9/16/2018"),
            Some("8/30/2018"),
            Some("7/29/2018"),
            None,
            Some("8/30/2018"),
            Some("7/29/2018"),
            Some("10/1/2018"),
        ]);
        let counts = ValueCounts::from_values(&dates);
        match classify(&dates, &counts) {
            Classification::Datetime(parsed) => {
                assert!(matches!(parsed, Cow::Owned(_)));
                assert_eq!(parsed.len(), 7);
                assert_eq!(parsed.iter().flatten().count(), 6);
            }
            other => panic!("expected datetime, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_text_is_nominal() {
        let values = text(&[
            Some("True"),
            Some("False"),
            Some("True"),
            Some("False"),
            Some("18"),
        ]);
        assert_eq!(classify_values(&values), ClassifiedType::Nominal);

        let mixed = text(&[
            Some("2018-07-29"),
            Some("2018-07-30"),
            Some("2018-07-29"),
            Some("unknown"),
        ]);
        assert_eq!(classify_values(&mixed), ClassifiedType::Nominal);
    }
}
