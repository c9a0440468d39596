//! Seeded row sampling.

use std::borrow::Cow;

use dp_model::Table;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

/// Selects `size` distinct rows with a seeded generator.
///
/// The sampled rows keep their original relative order, so the same seed
/// and table always yield the same sample. `None` returns the table as is;
/// a size larger than the table falls back to the full population with a
/// warning.
pub fn sample_rows(table: &Table, size: Option<usize>, seed: u64) -> Cow<'_, Table> {
    let Some(size) = size else {
        return Cow::Borrowed(table);
    };

    let population = table.height();
    if size > population {
        warn!(
            requested = size,
            population, "sample size exceeds row count, using the whole table"
        );
        return Cow::Borrowed(table);
    }
    if size == population {
        return Cow::Borrowed(table);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = rand::seq::index::sample(&mut rng, population, size).into_vec();
    rows.sort_unstable();

    info!(size, population, seed, "sampled rows for profiling");
    Cow::Owned(table.take(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dp_model::{Column, ColumnValues};

    fn numbers(n: i64) -> Table {
        Table::new(vec![Column::new(
            "n",
            ColumnValues::Integer((0..n).map(Some).collect()),
        )])
        .unwrap()
    }

    #[test]
    fn test_no_sample_borrows() {
        let table = numbers(10);
        assert!(matches!(sample_rows(&table, None, 1), Cow::Borrowed(_)));
    }

    #[test]
    fn test_oversized_sample_uses_population() {
        let table = numbers(10);
        let sample = sample_rows(&table, Some(50), 2018);
        assert_eq!(sample.height(), 10);
    }

    #[test]
    fn test_sample_is_seeded() {
        let table = numbers(100);
        let a = sample_rows(&table, Some(10), 2018);
        let b = sample_rows(&table, Some(10), 2018);
        assert_eq!(a.height(), 10);
        assert_eq!(a, b);

        let keys: Vec<_> = a.columns()[0].values().keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
