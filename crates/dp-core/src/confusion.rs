//! Contingency tables between binary variables.

use std::collections::{BTreeMap, BTreeSet};

use dp_model::{BinaryValue, Column, ConfusionMatrix};
use tracing::debug;

/// Label of one cell, missing entries kept apart from observed text.
fn label(column: &Column, row: usize) -> BinaryValue {
    column
        .values()
        .key(row)
        .map_or(BinaryValue::Missing, |key| BinaryValue::Observed(key.to_string()))
}

/// Cross-tabulates two columns of equal length.
///
/// Observed values are compared as strings so boolean and numeric encodings
/// line up. Labels are sorted with the missing label last.
pub fn confusion_matrix(rows: &Column, columns: &Column) -> ConfusionMatrix {
    let mut cells: BTreeMap<(BinaryValue, BinaryValue), usize> = BTreeMap::new();
    let mut row_labels = BTreeSet::new();
    let mut column_labels = BTreeSet::new();

    for row in 0..rows.len().min(columns.len()) {
        let a = label(rows, row);
        let b = label(columns, row);
        row_labels.insert(a.clone());
        column_labels.insert(b.clone());
        *cells.entry((a, b)).or_default() += 1;
    }

    let row_labels: Vec<BinaryValue> = row_labels.into_iter().collect();
    let column_labels: Vec<BinaryValue> = column_labels.into_iter().collect();
    let counts = row_labels
        .iter()
        .map(|a| {
            column_labels
                .iter()
                .map(|b| cells.get(&(a.clone(), b.clone())).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    ConfusionMatrix {
        row_variable: rows.name().to_string(),
        column_variable: columns.name().to_string(),
        row_labels,
        column_labels,
        counts,
    }
}

/// Builds one matrix per unordered pair, pairs enumerated in input order.
///
/// Fewer than two columns yield no matrix.
pub fn confusion_matrices(columns: &[&Column]) -> Vec<ConfusionMatrix> {
    let mut matrices = Vec::new();
    for (i, first) in columns.iter().enumerate() {
        for second in &columns[i + 1..] {
            debug!(
                row = first.name(),
                column = second.name(),
                "building confusion matrix"
            );
            matrices.push(confusion_matrix(first, second));
        }
    }
    matrices
}

#[cfg(test)]
mod tests {
    use super::*;
    use dp_model::ColumnValues;

    fn observed(value: &str) -> BinaryValue {
        BinaryValue::Observed(value.to_string())
    }

    fn survived() -> Column {
        Column::new(
            "Survived",
            ColumnValues::Integer(vec![Some(0), Some(1), Some(1), Some(0), None]),
        )
    }

    fn sex() -> Column {
        Column::new(
            "Sex",
            ColumnValues::Text(
                ["male", "female", "female", "male", "male"]
                    .into_iter()
                    .map(|s| Some(s.to_string()))
                    .collect(),
            ),
        )
    }

    #[test]
    fn test_cross_tabulation() {
        let matrix = confusion_matrix(&sex(), &survived());
        assert_eq!(matrix.row_labels, vec![observed("female"), observed("male")]);
        assert_eq!(
            matrix.column_labels,
            vec![observed("0"), observed("1"), BinaryValue::Missing]
        );
        assert_eq!(matrix.get("male", "0"), Some(2));
        assert_eq!(matrix.get("female", "1"), Some(2));
        assert_eq!(matrix.count(&observed("male"), &BinaryValue::Missing), Some(1));
        assert_eq!(matrix.get("female", "0"), Some(0));
        assert_eq!(matrix.total(), 5);
    }

    #[test]
    fn test_pairs() {
        let alive = Column::new(
            "Alive",
            ColumnValues::Boolean(vec![Some(false), Some(true), Some(true), Some(false), None]),
        );
        let (a, b) = (sex(), survived());
        assert!(confusion_matrices(&[&a]).is_empty());
        assert_eq!(confusion_matrices(&[&a, &b]).len(), 1);

        let matrices = confusion_matrices(&[&a, &b, &alive]);
        let pairs: Vec<_> = matrices
            .iter()
            .map(|m| (m.row_variable.as_str(), m.column_variable.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("Sex", "Survived"), ("Sex", "Alive"), ("Survived", "Alive")]
        );

        // boolean and integer encodings cross-tabulate by value
        let mixed = &matrices[2];
        assert_eq!(
            mixed.column_labels,
            vec![observed("False"), observed("True"), BinaryValue::Missing]
        );
        assert_eq!(mixed.get("1", "True"), Some(2));
        assert_eq!(mixed.get("0", "False"), Some(2));
        assert_eq!(mixed.get("1", "False"), Some(0));
        assert_eq!(mixed.get("0", "True"), Some(0));
        assert_eq!(
            mixed.count(&BinaryValue::Missing, &BinaryValue::Missing),
            Some(1)
        );
        assert_eq!(mixed.total(), 5);
    }

    #[test]
    fn test_literal_null_is_not_missing() {
        let answer = Column::new(
            "Answer",
            ColumnValues::Text(vec![
                Some("null".to_string()),
                None,
                Some("yes".to_string()),
                Some("null".to_string()),
                None,
            ]),
        );
        let flag = Column::new(
            "Flag",
            ColumnValues::Integer(vec![Some(0), Some(1), Some(0), Some(1), Some(0)]),
        );

        let matrix = confusion_matrix(&answer, &flag);
        assert_eq!(
            matrix.row_labels,
            vec![observed("null"), observed("yes"), BinaryValue::Missing]
        );
        assert_eq!(matrix.counts, vec![vec![1, 1], vec![1, 0], vec![1, 1]]);
        assert_eq!(matrix.get("null", "0"), Some(1));
        assert_eq!(matrix.count(&BinaryValue::Missing, &observed("1")), Some(1));
    }
}
