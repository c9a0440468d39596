//! Conversion from Polars DataFrames into the profiling table model.
//!
//! Column dtypes map onto [`dp_model::StorageKind`]s: booleans stay booleans, every
//! integer width becomes `Integer`, floats become `Float`, dates and
//! datetimes become `Datetime`. Text is trimmed and blank strings count as
//! missing. Any other dtype is rendered as text when Polars can cast it.

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeDelta};
use dp_model::{Column as ProfileColumn, ColumnValues, Table};
use polars::prelude::*;
use tracing::debug;

use crate::error::{ProfileError, Result};

/// Builds a [`Table`] snapshot from a DataFrame.
///
/// # Errors
///
/// Returns [`ProfileError::UnsupportedColumn`] for a column whose values
/// cannot be extracted, or a polars error if a cast fails.
pub fn table_from_dataframe(df: &DataFrame) -> Result<Table> {
    let columns = df
        .get_columns()
        .iter()
        .map(column_from_polars)
        .collect::<Result<Vec<_>>>()?;
    Ok(Table::new(columns)?)
}

fn column_from_polars(col: &Column) -> Result<ProfileColumn> {
    let name = col.name().to_string();
    let dtype = col.dtype();

    let values = if matches!(dtype, DataType::Null) {
        ColumnValues::Null(col.len())
    } else if matches!(dtype, DataType::Boolean) {
        ColumnValues::Boolean(col.bool()?.iter().collect())
    } else if dtype.is_integer() {
        let cast = col.cast(&DataType::Int64)?;
        ColumnValues::Integer(cast.i64()?.iter().collect())
    } else if dtype.is_float() {
        let cast = col.cast(&DataType::Float64)?;
        ColumnValues::Float(cast.f64()?.iter().collect())
    } else if matches!(dtype, DataType::Date) {
        let cast = col.cast(&DataType::Int32)?;
        ColumnValues::Datetime(
            cast.i32()?
                .iter()
                .map(|days| days.and_then(date_from_epoch_days))
                .collect(),
        )
    } else if let DataType::Datetime(unit, _) = dtype {
        let unit = *unit;
        let cast = col.cast(&DataType::Int64)?;
        ColumnValues::Datetime(
            cast.i64()?
                .iter()
                .map(|ts| ts.and_then(|ts| datetime_from_timestamp(ts, unit)))
                .collect(),
        )
    } else if matches!(dtype, DataType::String) {
        ColumnValues::Text(text_values(col)?)
    } else {
        debug!(column = %name, dtype = %dtype, "profiling column as text");
        let cast = col
            .cast(&DataType::String)
            .map_err(|_| ProfileError::UnsupportedColumn {
                column: name.clone(),
                dtype: dtype.to_string(),
            })?;
        ColumnValues::Text(text_values(&cast)?)
    };

    Ok(ProfileColumn::new(name, values))
}

fn text_values(col: &Column) -> Result<Vec<Option<String>>> {
    Ok(col
        .str()?
        .iter()
        .map(|value| {
            value
                .map(str::trim)
                .filter(|trimmed| !trimmed.is_empty())
                .map(str::to_string)
        })
        .collect())
}

fn date_from_epoch_days(days: i32) -> Option<NaiveDateTime> {
    let epoch = DateTime::UNIX_EPOCH.date_naive();
    let date = epoch.checked_add_signed(TimeDelta::try_days(i64::from(days))?)?;
    Some(date.and_time(NaiveTime::MIN))
}

fn datetime_from_timestamp(ts: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let utc = match unit {
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(ts)),
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(ts),
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(ts),
    };
    utc.map(|dt| dt.naive_utc())
}
