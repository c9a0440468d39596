//! Table-level aggregation of per-column results.

use std::collections::{HashMap, HashSet};

use dp_model::{
    ClassifiedType, Table, TableStats, TypeCount, TypeGroup, VariableProfile, VariableSummary,
};

/// Groups profiles by classified type.
///
/// Groups appear in the order their type is first seen; within a group the
/// profiles keep their input (column) order.
pub fn group_by_type(profiles: impl IntoIterator<Item = VariableProfile>) -> Vec<TypeGroup> {
    let mut first_seen: HashMap<ClassifiedType, usize> = HashMap::new();
    let mut groups: Vec<TypeGroup> = Vec::new();

    for profile in profiles {
        let classified_type = profile.classified_type();
        let index = *first_seen.entry(classified_type).or_insert_with(|| {
            groups.push(TypeGroup::new(classified_type));
            groups.len() - 1
        });
        groups[index].variables.push(profile);
    }

    groups
}

/// Rows without any non-missing value. A table without columns has none.
pub fn count_empty_rows(table: &Table) -> usize {
    if table.width() == 0 {
        return 0;
    }
    (0..table.height())
        .filter(|&row| {
            table
                .columns()
                .iter()
                .all(|column| !column.values().is_present(row))
        })
        .count()
}

/// Rows equal to an earlier row; the first occurrence is not counted.
pub fn count_duplicated_rows(table: &Table) -> usize {
    let mut seen = HashSet::with_capacity(table.height());
    (0..table.height())
        .filter(|&row| !seen.insert(table.row_keys(row)))
        .count()
}

/// Computes dataset-wide counts and the per-type column counts.
pub fn table_stats(table: &Table, groups: &[TypeGroup]) -> TableStats {
    let n_missing_cell = table
        .columns()
        .iter()
        .map(|column| column.values().missing_count())
        .sum();

    TableStats {
        n_row: table.height(),
        n_col: table.width(),
        n_missing_cell,
        n_empty_row: count_empty_rows(table),
        n_duplicated_row: count_duplicated_rows(table),
        type_counts: groups
            .iter()
            .map(|group| TypeCount {
                classified_type: group.classified_type,
                count: group.variables.len(),
            })
            .collect(),
    }
}

/// Flattens grouped profiles into one summary row per variable.
pub fn var_summary(groups: &[TypeGroup]) -> Vec<VariableSummary> {
    groups
        .iter()
        .flat_map(|group| group.variables.iter().map(VariableSummary::from))
        .collect()
}
