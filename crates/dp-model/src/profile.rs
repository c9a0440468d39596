//! Table-level profiling results.

use serde::Serialize;

use crate::stats::{BaseStats, BinaryValue, VariableProfile};
use crate::table::StorageKind;
use crate::types::ClassifiedType;

/// Number of columns assigned to one classified type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub classified_type: ClassifiedType,
    pub count: usize,
}

/// Dataset-wide counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub n_row: usize,
    pub n_col: usize,
    /// Missing cells over all columns and rows.
    pub n_missing_cell: usize,
    /// Rows without a single non-missing value.
    pub n_empty_row: usize,
    /// Rows identical to an earlier row.
    pub n_duplicated_row: usize,
    /// One entry per classified type present, in first-seen order.
    pub type_counts: Vec<TypeCount>,
}

impl TableStats {
    /// Number of columns of the given type, zero when absent.
    pub fn type_count(&self, classified_type: ClassifiedType) -> usize {
        self.type_counts
            .iter()
            .find(|entry| entry.classified_type == classified_type)
            .map_or(0, |entry| entry.count)
    }

    /// Named counts in report order, ending with one `n_<Type>_var` per type.
    pub fn entries(&self) -> Vec<(String, usize)> {
        let mut entries = vec![
            ("n_row".to_string(), self.n_row),
            ("n_col".to_string(), self.n_col),
            ("n_missing_cell".to_string(), self.n_missing_cell),
            ("n_empty_row".to_string(), self.n_empty_row),
            ("n_duplicated_row".to_string(), self.n_duplicated_row),
        ];
        entries.extend(
            self.type_counts
                .iter()
                .map(|entry| (entry.classified_type.count_key(), entry.count)),
        );
        entries
    }
}

/// One row of the flattened variable summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableSummary {
    pub name: String,
    pub classified_type: ClassifiedType,
    pub storage: StorageKind,
    #[serde(flatten)]
    pub base: BaseStats,
}

impl From<&VariableProfile> for VariableSummary {
    fn from(profile: &VariableProfile) -> Self {
        Self {
            name: profile.name.clone(),
            classified_type: profile.classified_type(),
            storage: profile.storage,
            base: profile.base.clone(),
        }
    }
}

/// The variables assigned to one classified type, in column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeGroup {
    pub classified_type: ClassifiedType,
    pub variables: Vec<VariableProfile>,
}

impl TypeGroup {
    pub fn new(classified_type: ClassifiedType) -> Self {
        Self {
            classified_type,
            variables: Vec::new(),
        }
    }
}

/// Co-occurrence counts of two binary variables.
///
/// Rows are the values of `row_variable`, columns those of
/// `column_variable`; labels are sorted with the missing label last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub row_variable: String,
    pub column_variable: String,
    pub row_labels: Vec<BinaryValue>,
    pub column_labels: Vec<BinaryValue>,
    /// `counts[row][column]`.
    pub counts: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    /// Count for a pair of labels, `None` if either label is unknown.
    pub fn count(&self, row_label: &BinaryValue, column_label: &BinaryValue) -> Option<usize> {
        let row = self.row_labels.iter().position(|label| label == row_label)?;
        let column = self
            .column_labels
            .iter()
            .position(|label| label == column_label)?;
        self.counts.get(row)?.get(column).copied()
    }

    /// Count for a pair of observed values.
    pub fn get(&self, row_value: &str, column_value: &str) -> Option<usize> {
        self.count(
            &BinaryValue::Observed(row_value.to_string()),
            &BinaryValue::Observed(column_value.to_string()),
        )
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// Everything computed for one dataset.
///
/// Built once per profiling run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableProfile {
    pub table_stats: TableStats,
    pub var_summary: Vec<VariableSummary>,
    /// Groups in first-seen type order, variables in column order.
    pub var_stats: Vec<TypeGroup>,
    /// Present only with at least two binary variables.
    pub conf_matrix: Vec<ConfusionMatrix>,
}

impl TableProfile {
    pub fn group(&self, classified_type: ClassifiedType) -> Option<&TypeGroup> {
        self.var_stats
            .iter()
            .find(|group| group.classified_type == classified_type)
    }

    pub fn variable(&self, name: &str) -> Option<&VariableProfile> {
        self.var_stats
            .iter()
            .flat_map(|group| group.variables.iter())
            .find(|profile| profile.name == name)
    }
}
