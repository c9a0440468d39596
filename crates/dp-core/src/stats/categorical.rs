//! Nominal (categorical) variable statistics.

use dp_model::{CategoricalStats, FrequentValue};

use super::frequency::ValueCounts;

/// Shortens `value` to `max_len` characters followed by `...`.
///
/// ```
/// use dp_core::stats::truncate_value;
///
/// assert_eq!(truncate_value("Braund, Mr. Owen Harris", 6), "Braund...");
/// assert_eq!(truncate_value("S", 6), "S");
/// ```
pub fn truncate_value(value: &str, max_len: usize) -> String {
    match value.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}...", &value[..cut]),
        None => value.to_string(),
    }
}

/// Picks the three most frequent values.
///
/// Ties go to the value seen first. The third entry is only present with at
/// least three distinct values. Values are truncated to `max_value_len`.
pub fn categorical_stats(counts: &ValueCounts, max_value_len: usize) -> CategoricalStats {
    let frequent = |rank: usize| {
        counts.nth(rank).map(|(key, freq)| FrequentValue {
            value: truncate_value(&key.to_string(), max_value_len),
            freq,
        })
    };

    CategoricalStats {
        mode: frequent(0),
        second: frequent(1),
        third: frequent(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dp_model::ColumnValues;

    fn embarked() -> ColumnValues {
        let mut values = Vec::new();
        values.extend(std::iter::repeat_n(Some("S".to_string()), 644));
        values.extend(std::iter::repeat_n(Some("C".to_string()), 168));
        values.extend(std::iter::repeat_n(Some("Q".to_string()), 77));
        values.extend(std::iter::repeat_n(None, 2));
        ColumnValues::Text(values)
    }

    #[test]
    fn test_top_three() {
        let counts = ValueCounts::from_values(&embarked());
        let stats = categorical_stats(&counts, 50);

        assert_eq!(
            stats.mode,
            Some(FrequentValue {
                value: "S".to_string(),
                freq: 644
            })
        );
        assert_eq!(stats.second.as_ref().map(|v| v.freq), Some(168));
        assert_eq!(stats.second.unwrap().value, "C");
        assert_eq!(stats.third.as_ref().map(|v| v.value.as_str()), Some("Q"));
        assert_eq!(stats.third.unwrap().freq, 77);
    }

    #[test]
    fn test_two_values_have_no_third() {
        let values = ColumnValues::Text(vec![
            Some("a".to_string()),
            Some("b".to_string()),
            Some("a".to_string()),
        ]);
        let stats = categorical_stats(&ValueCounts::from_values(&values), 50);
        assert!(stats.third.is_none());
    }

    #[test]
    fn test_truncation() {
        assert_eq!(truncate_value("abcdef", 3), "abc...");
        assert_eq!(truncate_value("abc", 3), "abc");
        assert_eq!(truncate_value("héllo wörld", 5), "héllo...");

        let values = ColumnValues::Text(vec![
            Some("a very long ticket description".to_string()),
            Some("x".to_string()),
            Some("y".to_string()),
        ]);
        let stats = categorical_stats(&ValueCounts::from_values(&values), 6);
        assert_eq!(stats.mode.unwrap().value, "a very...");
    }
}
