//! Binary variable statistics.

use dp_model::{BinaryCount, BinaryStats, BinaryValue, ratio};

use super::frequency::ValueCounts;

/// Computes the two categories of a binary column, most frequent first.
///
/// With a single observed value the missing entries form the second
/// category. Ratios are relative to the total count, missing included.
pub fn binary_stats(counts: &ValueCounts, count: usize) -> BinaryStats {
    let mut categories: Vec<(BinaryValue, usize)> = counts
        .entries()
        .iter()
        .take(2)
        .map(|(key, n)| (BinaryValue::Observed(key.to_string()), *n))
        .collect();

    let missing = count.saturating_sub(counts.total());
    if categories.len() == 1 && missing > 0 {
        categories.push((BinaryValue::Missing, missing));
        // stable: the observed value wins a tie
        categories.sort_by(|a, b| b.1.cmp(&a.1));
    }

    let mut sides = categories.into_iter().map(|(value, n)| BinaryCount {
        value,
        count: n,
        ratio: ratio(n, count),
    });

    BinaryStats {
        value1: sides.next(),
        value2: sides.next(),
    }
}
