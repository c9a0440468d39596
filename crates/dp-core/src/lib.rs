//! Dataset profiling engine.
//!
//! Turns a table into a [`TableProfile`](dp_model::TableProfile):
//!
//! - [`frame`]: Polars DataFrame to [`Table`](dp_model::Table) conversion
//! - [`sample`]: Seeded row sampling before profiling
//! - [`temporal`]: Fallible date parsing for text columns
//! - [`classify`]: The ordered type classification rules
//! - [`stats`]: One calculator per classified type
//! - [`aggregate`]: Type grouping and table-level counts
//! - [`confusion`]: Contingency tables between binary variables
//! - [`profile`]: Parallel entry points tying the above together
//!
//! # Example
//!
//! ```
//! use dp_core::{ProfileOptions, profile_table};
//! use dp_model::{ClassifiedType, Column, ColumnValues, Table};
//!
//! let table = Table::new(vec![
//!     Column::new("Survived", ColumnValues::Integer(vec![Some(0), Some(1), Some(1)])),
//!     Column::new("Fare", ColumnValues::Float(vec![Some(7.25), Some(71.28), Some(7.92)])),
//! ])
//! .unwrap();
//!
//! let profile = profile_table(&table, &ProfileOptions::default()).unwrap();
//! assert_eq!(profile.table_stats.n_row, 3);
//! assert_eq!(
//!     profile.variable("Survived").unwrap().classified_type(),
//!     ClassifiedType::Binary
//! );
//! ```

pub mod aggregate;
pub mod classify;
pub mod confusion;
pub mod error;
pub mod frame;
pub mod options;
pub mod profile;
pub mod sample;
pub mod stats;
pub mod temporal;

pub use classify::{Classification, classify, classify_values};
pub use confusion::{confusion_matrices, confusion_matrix};
pub use error::{ProfileError, Result};
pub use frame::table_from_dataframe;
pub use options::{DEFAULT_MAX_VALUE_LEN, DEFAULT_SEED, ProfileOptions};
pub use profile::{profile_column, profile_dataframe, profile_table, variable_summary};
pub use sample::sample_rows;
pub use temporal::{TemporalParseError, parse_column, parse_datetime};
