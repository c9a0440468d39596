//! Statistics shared by every variable.

use dp_model::{BaseStats, ColumnValues, ratio};

use super::frequency::ValueCounts;

/// Computes count, missing and uniqueness figures for a column.
///
/// `p_unique` is relative to the non-missing entries, not the total count.
/// Both ratios are `None` when their denominator is zero, and `n_unique` is
/// `None` for a column without any value.
pub fn base_stats(values: &ColumnValues, counts: &ValueCounts) -> BaseStats {
    let count = values.len();
    let non_missing = values.non_missing_count();
    let n_missing = count - non_missing;
    let distinct = counts.distinct();

    BaseStats {
        count,
        n_missing,
        p_missing: ratio(n_missing, count),
        n_unique: (distinct > 0).then_some(distinct),
        p_unique: if distinct > 0 {
            ratio(distinct, non_missing)
        } else {
            None
        },
    }
}
