//! Value frequency counting.

use std::collections::HashMap;

use dp_model::{ColumnValues, ValueKey};

/// Counts of the distinct non-missing values of a column.
///
/// Entries are ordered by descending count. Equal counts keep the order in
/// which the values were first encountered, so ties never depend on hashing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueCounts {
    entries: Vec<(ValueKey, usize)>,
}

impl ValueCounts {
    pub fn from_values(values: &ColumnValues) -> Self {
        Self::from_keys(values.keys().flatten())
    }

    pub fn from_keys(keys: impl IntoIterator<Item = ValueKey>) -> Self {
        let mut index: HashMap<ValueKey, usize> = HashMap::new();
        let mut entries: Vec<(ValueKey, usize)> = Vec::new();

        for key in keys {
            match index.get(&key) {
                Some(&position) => entries[position].1 += 1,
                None => {
                    index.insert(key.clone(), entries.len());
                    entries.push((key, 1));
                }
            }
        }

        // stable sort keeps first-seen order among ties
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    /// Number of distinct values.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Total number of counted values.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn entries(&self) -> &[(ValueKey, usize)] {
        &self.entries
    }

    /// The `rank`-th most frequent value (zero-based).
    pub fn nth(&self, rank: usize) -> Option<(&ValueKey, usize)> {
        self.entries.get(rank).map(|(key, count)| (key, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(values: &[&str]) -> ColumnValues {
        ColumnValues::Text(
            values
                .iter()
                .map(|v| (!v.is_empty()).then(|| v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_counts_descending() {
        let counts = ValueCounts::from_values(&text(&["S", "C", "S", "", "Q", "S", "C"]));
        assert_eq!(counts.distinct(), 3);
        assert_eq!(counts.total(), 6);
        assert_eq!(
            counts.nth(0),
            Some((&ValueKey::Text("S".to_string()), 3))
        );
        assert_eq!(
            counts.nth(2),
            Some((&ValueKey::Text("Q".to_string()), 1))
        );
        assert_eq!(counts.nth(3), None);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let counts = ValueCounts::from_values(&text(&["b", "a", "c", "a", "b", "c"]));
        let order: Vec<_> = counts.entries().iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }
}
