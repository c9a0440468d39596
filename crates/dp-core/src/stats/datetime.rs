//! Datetime variable statistics.

use chrono::{Datelike, NaiveDateTime, TimeDelta};
use dp_model::{DatetimeStats, PERCENTILE_LEVELS, Percentiles, WeekdayCounts};

/// Scales a duration by a fraction in `[0, 1]`, to microsecond precision.
fn scale(delta: TimeDelta, fraction: f64) -> TimeDelta {
    match delta.num_microseconds() {
        Some(micros) => TimeDelta::microseconds((micros as f64 * fraction).round() as i64),
        None => TimeDelta::seconds((delta.num_seconds() as f64 * fraction).round() as i64),
    }
}

/// Linear-interpolated quantile of sorted datetimes.
fn quantile_sorted(sorted: &[NaiveDateTime], q: f64) -> Option<NaiveDateTime> {
    let last = sorted.len().checked_sub(1)?;
    let position = q * last as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    let base = sorted[lower];
    Some(base + scale(sorted[upper] - base, fraction))
}

/// Computes extrema, range, percentiles and the weekday histogram of the
/// non-missing values of a temporal column.
///
/// All seven weekdays are always present in the histogram.
pub fn datetime_stats(values: &[NaiveDateTime]) -> DatetimeStats {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let min = sorted.first().copied();
    let max = sorted.last().copied();

    let percentiles = if sorted.is_empty() {
        None
    } else {
        let mut levels = [NaiveDateTime::MIN; 5];
        for (slot, q) in levels.iter_mut().zip(PERCENTILE_LEVELS) {
            if let Some(value) = quantile_sorted(&sorted, q) {
                *slot = value;
            }
        }
        Some(Percentiles::from_array(levels))
    };

    let mut day_of_week = WeekdayCounts::default();
    for value in values {
        day_of_week.record(value.weekday());
    }

    DatetimeStats {
        min,
        max,
        range: min.zip(max).map(|(min, max)| max - min),
        percentiles,
        day_of_week,
    }
}
