//! Profiling entry points.
//!
//! Columns are classified and described in parallel, one unit of work per
//! column. The results are merged by a single-threaded reduction so the
//! output order never depends on scheduling.

use dp_model::{
    ClassifiedType, Column, Table, TableProfile, VariableProfile, VariableStats, VariableSummary,
};
use polars::prelude::DataFrame;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::aggregate::{group_by_type, table_stats, var_summary};
use crate::classify::{Classification, classify};
use crate::confusion::confusion_matrices;
use crate::error::Result;
use crate::frame::table_from_dataframe;
use crate::options::ProfileOptions;
use crate::sample::sample_rows;
use crate::stats::{
    ValueCounts, base_stats, binary_stats, categorical_stats, datetime_stats, numeric_stats,
};

/// Classifies one column and computes the statistics of its type.
///
/// Pure: the same column and options always give the same profile.
pub fn profile_column(column: &Column, options: &ProfileOptions) -> VariableProfile {
    let values = column.values();
    let counts = ValueCounts::from_values(values);
    let base = base_stats(values, &counts);

    let stats = match classify(values, &counts) {
        Classification::Empty => VariableStats::Empty,
        Classification::Constant => VariableStats::Constant,
        Classification::Unique => VariableStats::Unique,
        Classification::Binary => VariableStats::Binary(binary_stats(&counts, base.count)),
        Classification::Interval => {
            let numbers = values.numeric_values().unwrap_or_default();
            VariableStats::Interval(numeric_stats(&numbers))
        }
        Classification::Datetime(temporal) => {
            let present: Vec<_> = temporal.iter().flatten().copied().collect();
            VariableStats::Datetime(datetime_stats(&present))
        }
        Classification::Nominal => {
            VariableStats::Nominal(categorical_stats(&counts, options.max_value_len))
        }
    };

    debug!(
        column = column.name(),
        classified_type = %stats.classified_type(),
        "column profiled"
    );

    VariableProfile {
        name: column.name().to_string(),
        storage: column.storage_kind(),
        base,
        stats,
    }
}

/// Profiles every column on the configured worker pool, in column order.
fn profile_columns(table: &Table, options: &ProfileOptions) -> Result<Vec<VariableProfile>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.workers.unwrap_or(0))
        .build()?;

    Ok(pool.install(|| {
        table
            .columns()
            .par_iter()
            .map(|column| profile_column(column, options))
            .collect()
    }))
}

/// Builds the full profile of a table.
///
/// The table is sampled first when a sample size is configured. Confusion
/// matrices are built for every pair of binary variables when enabled.
///
/// # Errors
///
/// Fails only when the worker pool cannot be created.
pub fn profile_table(table: &Table, options: &ProfileOptions) -> Result<TableProfile> {
    info!(
        rows = table.height(),
        columns = table.width(),
        "Collecting stats for data profile"
    );

    let table = sample_rows(table, options.sample_size, options.seed);
    let profiles = profile_columns(&table, options)?;

    let var_stats = group_by_type(profiles);
    let table_stats = table_stats(&table, &var_stats);
    let var_summary = var_summary(&var_stats);

    let conf_matrix = if options.confusion_matrices {
        let binary: Vec<&Column> = var_stats
            .iter()
            .filter(|group| group.classified_type == ClassifiedType::Binary)
            .flat_map(|group| group.variables.iter())
            .filter_map(|profile| table.column(&profile.name))
            .collect();
        confusion_matrices(&binary)
    } else {
        Vec::new()
    };

    info!(
        groups = var_stats.len(),
        confusion_matrices = conf_matrix.len(),
        "data profile ready"
    );

    Ok(TableProfile {
        table_stats,
        var_summary,
        var_stats,
        conf_matrix,
    })
}

/// Builds the full profile of a DataFrame.
///
/// # Errors
///
/// Returns an error if a column cannot be converted or the worker pool
/// cannot be created.
pub fn profile_dataframe(df: &DataFrame, options: &ProfileOptions) -> Result<TableProfile> {
    let table = table_from_dataframe(df)?;
    profile_table(&table, options)
}

/// Computes only the flattened per-variable summary of a table.
///
/// # Errors
///
/// Fails only when the worker pool cannot be created.
pub fn variable_summary(table: &Table, options: &ProfileOptions) -> Result<Vec<VariableSummary>> {
    let table = sample_rows(table, options.sample_size, options.seed);
    let groups = group_by_type(profile_columns(&table, options)?);
    Ok(var_summary(&groups))
}
