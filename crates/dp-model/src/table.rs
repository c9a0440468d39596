//! In-memory tabular dataset.
//!
//! A [`Table`] is an immutable snapshot of named, equally long columns. Each
//! [`Column`] stores its values with a single declared storage kind; missing
//! entries are `None` (and `NaN` for floats).

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Declared storage kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKind {
    /// Untyped column where every entry is missing.
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    Datetime,
}

impl StorageKind {
    /// Numeric kinds, booleans included.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            StorageKind::Boolean | StorageKind::Integer | StorageKind::Float
        )
    }

    /// Label shown in the variable summary.
    pub fn display_kind(self) -> &'static str {
        match self {
            StorageKind::Boolean => "Boolean",
            StorageKind::Integer | StorageKind::Float => "Numerical",
            StorageKind::Datetime => "Datetime",
            StorageKind::Null | StorageKind::Text => "Categorical",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_kind())
    }
}

/// Hashable, comparable form of one non-missing cell.
///
/// Floats are keyed by their bit pattern with `-0.0` folded into `0.0`, so
/// equal numbers always count as the same distinct value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKey {
    Bool(bool),
    Int(i64),
    Float(u64),
    Text(String),
    Datetime(NaiveDateTime),
}

impl ValueKey {
    /// Builds a float key. Returns `None` for `NaN`, which counts as missing.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_nan() {
            return None;
        }
        let normalized = if value == 0.0 { 0.0_f64 } else { value };
        Some(ValueKey::Float(normalized.to_bits()))
    }
}

impl fmt::Display for ValueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKey::Bool(true) => f.write_str("True"),
            ValueKey::Bool(false) => f.write_str("False"),
            ValueKey::Int(v) => write!(f, "{v}"),
            ValueKey::Float(bits) => f.write_str(&format_numeric(f64::from_bits(*bits))),
            ValueKey::Text(s) => f.write_str(s),
            ValueKey::Datetime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Formats a floating-point number without a trailing `.0`.
///
/// # Examples
///
/// ```
/// use dp_model::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(100.0), "100");
/// assert_eq!(format_numeric(-0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Values of one column, tagged by storage kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    /// Untyped column of the given length; every entry is missing.
    Null(usize),
    Boolean(Vec<Option<bool>>),
    Integer(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
    Datetime(Vec<Option<NaiveDateTime>>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Null(len) => *len,
            ColumnValues::Boolean(v) => v.len(),
            ColumnValues::Integer(v) => v.len(),
            ColumnValues::Float(v) => v.len(),
            ColumnValues::Text(v) => v.len(),
            ColumnValues::Datetime(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn storage_kind(&self) -> StorageKind {
        match self {
            ColumnValues::Null(_) => StorageKind::Null,
            ColumnValues::Boolean(_) => StorageKind::Boolean,
            ColumnValues::Integer(_) => StorageKind::Integer,
            ColumnValues::Float(_) => StorageKind::Float,
            ColumnValues::Text(_) => StorageKind::Text,
            ColumnValues::Datetime(_) => StorageKind::Datetime,
        }
    }

    /// Returns the key of the value at `row`, or `None` when the entry is
    /// missing or out of range.
    pub fn key(&self, row: usize) -> Option<ValueKey> {
        match self {
            ColumnValues::Null(_) => None,
            ColumnValues::Boolean(v) => v.get(row).copied().flatten().map(ValueKey::Bool),
            ColumnValues::Integer(v) => v.get(row).copied().flatten().map(ValueKey::Int),
            ColumnValues::Float(v) => v.get(row).copied().flatten().and_then(ValueKey::from_f64),
            ColumnValues::Text(v) => v
                .get(row)
                .and_then(Option::as_ref)
                .map(|s| ValueKey::Text(s.clone())),
            ColumnValues::Datetime(v) => v.get(row).copied().flatten().map(ValueKey::Datetime),
        }
    }

    /// Iterates over the keys of every row, in row order.
    pub fn keys(&self) -> impl Iterator<Item = Option<ValueKey>> + '_ {
        (0..self.len()).map(move |row| self.key(row))
    }

    pub fn is_present(&self, row: usize) -> bool {
        match self {
            ColumnValues::Null(_) => false,
            ColumnValues::Boolean(v) => v.get(row).is_some_and(Option::is_some),
            ColumnValues::Integer(v) => v.get(row).is_some_and(Option::is_some),
            ColumnValues::Float(v) => v.get(row).copied().flatten().is_some_and(|x| !x.is_nan()),
            ColumnValues::Text(v) => v.get(row).is_some_and(Option::is_some),
            ColumnValues::Datetime(v) => v.get(row).is_some_and(Option::is_some),
        }
    }

    pub fn non_missing_count(&self) -> usize {
        (0..self.len()).filter(|&row| self.is_present(row)).count()
    }

    pub fn missing_count(&self) -> usize {
        self.len() - self.non_missing_count()
    }

    /// Non-missing values as `f64` for numeric kinds (booleans as 1/0).
    ///
    /// Returns `None` for non-numeric kinds.
    pub fn numeric_values(&self) -> Option<Vec<f64>> {
        match self {
            ColumnValues::Boolean(v) => Some(
                v.iter()
                    .flatten()
                    .map(|&b| if b { 1.0 } else { 0.0 })
                    .collect(),
            ),
            ColumnValues::Integer(v) => Some(v.iter().flatten().map(|&i| i as f64).collect()),
            ColumnValues::Float(v) => Some(
                v.iter()
                    .flatten()
                    .copied()
                    .filter(|x| !x.is_nan())
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Selects the given rows, in the given order. Out-of-range rows become
    /// missing entries.
    pub fn take(&self, rows: &[usize]) -> Self {
        fn pick<T: Clone>(values: &[Option<T>], rows: &[usize]) -> Vec<Option<T>> {
            rows.iter()
                .map(|&row| values.get(row).cloned().flatten())
                .collect()
        }
        match self {
            ColumnValues::Null(_) => ColumnValues::Null(rows.len()),
            ColumnValues::Boolean(v) => ColumnValues::Boolean(pick(v, rows)),
            ColumnValues::Integer(v) => ColumnValues::Integer(pick(v, rows)),
            ColumnValues::Float(v) => ColumnValues::Float(pick(v, rows)),
            ColumnValues::Text(v) => ColumnValues::Text(pick(v, rows)),
            ColumnValues::Datetime(v) => ColumnValues::Datetime(pick(v, rows)),
        }
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: ColumnValues,
}

impl Column {
    pub fn new(name: impl Into<String>, values: ColumnValues) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &ColumnValues {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn storage_kind(&self) -> StorageKind {
        self.values.storage_kind()
    }
}

/// An immutable dataset of equally long, uniquely named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    height: usize,
}

impl Table {
    /// Assembles a table.
    ///
    /// # Errors
    ///
    /// Returns an error when column lengths differ or a name is repeated.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let height = columns.first().map_or(0, Column::len);
        let mut seen = HashSet::new();
        for column in &columns {
            if column.len() != height {
                return Err(ModelError::ColumnLength {
                    column: column.name.clone(),
                    expected: height,
                    actual: column.len(),
                });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(ModelError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }
        }
        Ok(Self { columns, height })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Keys of every cell in `row`, one per column.
    pub fn row_keys(&self, row: usize) -> Vec<Option<ValueKey>> {
        self.columns
            .iter()
            .map(|column| column.values.key(row))
            .collect()
    }

    /// Returns a new table holding the given rows, in the given order.
    pub fn take(&self, rows: &[usize]) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|column| Column::new(column.name.clone(), column.values.take(rows)))
            .collect();
        Self {
            columns,
            height: rows.len(),
        }
    }
}
