//! Error types for profiling.

use thiserror::Error;

/// Errors that abort a profiling run.
///
/// Everything here is raised before any statistic is computed. Degenerate
/// columns and unparseable dates are classification outcomes, not errors.
#[derive(Debug, Error)]
pub enum ProfileError {
    // === Input Errors ===
    /// A DataFrame column has a dtype the profiler cannot represent.
    #[error("column '{column}' has unsupported dtype {dtype}")]
    UnsupportedColumn { column: String, dtype: String },

    /// Polars failed while extracting column values.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// The extracted columns do not form a valid table.
    #[error("invalid table: {0}")]
    Model(#[from] dp_model::ModelError),

    // === Execution Errors ===
    /// The worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for profiling operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
