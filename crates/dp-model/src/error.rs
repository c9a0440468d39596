//! Error types for the profiling data model.

use thiserror::Error;

/// Errors raised while assembling a [`Table`](crate::Table).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A column does not have the same number of rows as the first column.
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Two columns share the same name.
    #[error("duplicate column name '{name}'")]
    DuplicateColumn { name: String },
}

/// Result type for data model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
