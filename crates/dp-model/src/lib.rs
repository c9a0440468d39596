//! Data model for dataset profiling.
//!
//! This crate holds the plain types shared by the profiling workspace:
//!
//! - [`table`]: In-memory tabular dataset (`Table`, `Column`, `ColumnValues`)
//!   and the hashable cell representation used for counting (`ValueKey`)
//! - [`types`]: The semantic type assigned to each column (`ClassifiedType`)
//! - [`stats`]: Per-variable statistics records for every classified type
//! - [`profile`]: Table-level aggregates (`TableProfile`, `TableStats`,
//!   `ConfusionMatrix`)
//!
//! Statistics are stored as typed numbers. Percentages, separators and
//! truncation for display belong to the reporting layer.
//!
//! # Example
//!
//! ```
//! use dp_model::{Column, ColumnValues, StorageKind, Table};
//!
//! let table = Table::new(vec![
//!     Column::new("age", ColumnValues::Integer(vec![Some(22), None, Some(38)])),
//!     Column::new("sex", ColumnValues::Text(vec![
//!         Some("male".to_string()),
//!         Some("female".to_string()),
//!         None,
//!     ])),
//! ])
//! .unwrap();
//!
//! assert_eq!(table.height(), 3);
//! assert_eq!(table.width(), 2);
//! assert_eq!(table.columns()[0].storage_kind(), StorageKind::Integer);
//! ```

pub mod error;
pub mod profile;
pub mod stats;
pub mod table;
pub mod types;

pub use error::{ModelError, Result};
pub use profile::{
    ConfusionMatrix, TableProfile, TableStats, TypeCount, TypeGroup, VariableSummary,
};
pub use stats::{
    BaseStats, BinaryCount, BinaryStats, BinaryValue, CategoricalStats, DatetimeStats,
    FrequentValue, NumericStats, PERCENTILE_LEVELS, Percentiles, Ratio, VariableProfile,
    VariableStats, WeekdayCounts, ratio,
};
pub use table::{Column, ColumnValues, StorageKind, Table, ValueKey, format_numeric};
pub use types::ClassifiedType;
