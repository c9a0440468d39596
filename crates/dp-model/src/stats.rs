//! Per-variable statistics records.
//!
//! Every record starts from [`BaseStats`]; the payload of [`VariableStats`]
//! carries the statistics specific to the classified type. Undefined ratios
//! are `None` ("not applicable") and undefined moments are `NaN`.

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta, Weekday};
use serde::{Serialize, Serializer};

use crate::table::StorageKind;
use crate::types::ClassifiedType;

/// A fraction in `[0, 1]`, or `None` when the denominator is zero.
pub type Ratio = Option<f64>;

/// Divides two counts, yielding `None` for a zero denominator.
///
/// ```
/// assert_eq!(dp_model::ratio(1, 4), Some(0.25));
/// assert_eq!(dp_model::ratio(0, 0), None);
/// ```
pub fn ratio(numerator: usize, denominator: usize) -> Ratio {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

/// Percentile levels reported for numeric and temporal columns.
pub const PERCENTILE_LEVELS: [f64; 5] = [0.05, 0.25, 0.5, 0.75, 0.95];

/// Statistics shared by every variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseStats {
    /// Total number of entries, missing ones included.
    pub count: usize,
    pub n_missing: usize,
    /// `n_missing / count`.
    pub p_missing: Ratio,
    /// Distinct non-missing values; `None` when there are none.
    pub n_unique: Option<usize>,
    /// `n_unique / (count - n_missing)`.
    pub p_unique: Ratio,
}

impl BaseStats {
    /// Number of non-missing entries.
    pub fn non_missing(&self) -> usize {
        self.count - self.n_missing
    }

    /// Distinct non-missing values, zero for an empty column.
    pub fn distinct(&self) -> usize {
        self.n_unique.unwrap_or(0)
    }
}

/// Values at the 5th, 25th, 50th, 75th and 95th percentiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Percentiles<T> {
    pub p5: T,
    pub p25: T,
    pub p50: T,
    pub p75: T,
    pub p95: T,
}

impl<T: Copy> Percentiles<T> {
    /// Builds the record from values ordered like [`PERCENTILE_LEVELS`].
    pub fn from_array(values: [T; 5]) -> Self {
        let [p5, p25, p50, p75, p95] = values;
        Self {
            p5,
            p25,
            p50,
            p75,
            p95,
        }
    }

    /// Labelled values in ascending level order.
    pub fn labelled(&self) -> [(&'static str, T); 5] {
        [
            ("5%", self.p5),
            ("25%", self.p25),
            ("50%", self.p50),
            ("75%", self.p75),
            ("95%", self.p95),
        ]
    }
}

/// Statistics of a numeric (interval) variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericStats {
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    /// Sample variance (n - 1 denominator).
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    pub percentiles: Percentiles<f64>,
    /// `p75 - p25`.
    pub iqr: f64,
    /// Bias-corrected excess kurtosis.
    pub kurtosis: f64,
    /// Bias-corrected skewness.
    pub skewness: f64,
    pub sum: f64,
    /// Mean absolute deviation around the mean.
    pub mean_abs_dev: f64,
    /// `std / mean`, `NaN` when the mean is zero.
    pub coeff_of_variation: f64,
}

/// Occurrences per weekday, Monday first. Every bucket is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WeekdayCounts(pub [usize; 7]);

impl WeekdayCounts {
    pub const WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn record(&mut self, day: Weekday) {
        self.0[day.num_days_from_monday() as usize] += 1;
    }

    pub fn get(&self, day: Weekday) -> usize {
        self.0[day.num_days_from_monday() as usize]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// `(label, count)` pairs such as `("n_Monday", 3)`, Monday first.
    pub fn labelled(&self) -> [(&'static str, usize); 7] {
        [
            ("n_Monday", self.0[0]),
            ("n_Tuesday", self.0[1]),
            ("n_Wednesday", self.0[2]),
            ("n_Thursday", self.0[3]),
            ("n_Friday", self.0[4]),
            ("n_Saturday", self.0[5]),
            ("n_Sunday", self.0[6]),
        ]
    }
}

/// Statistics of a datetime variable.
///
/// The extrema are `None` only when the column has no non-missing value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatetimeStats {
    pub min: Option<NaiveDateTime>,
    pub max: Option<NaiveDateTime>,
    /// `max - min`, serialised as whole seconds.
    #[serde(serialize_with = "serialize_time_delta")]
    pub range: Option<TimeDelta>,
    pub percentiles: Option<Percentiles<NaiveDateTime>>,
    pub day_of_week: WeekdayCounts,
}

fn serialize_time_delta<S: Serializer>(
    delta: &Option<TimeDelta>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match delta {
        Some(delta) => serializer.serialize_some(&delta.num_seconds()),
        None => serializer.serialize_none(),
    }
}

/// A value and its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequentValue {
    pub value: String,
    pub freq: usize,
}

/// Statistics of a categorical (nominal) variable.
///
/// Values are display strings, already truncated to the configured length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoricalStats {
    pub mode: Option<FrequentValue>,
    pub second: Option<FrequentValue>,
    /// Present only with at least three distinct values.
    pub third: Option<FrequentValue>,
}

/// One side of a binary variable, or one label of a confusion matrix.
///
/// Observed values sort before `Missing`, so a literal `"null"` value and
/// the missing entries stay apart.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum BinaryValue {
    Observed(String),
    /// The missing entries, counted as a category of their own.
    Missing,
}

impl BinaryValue {
    /// Label used for the missing category.
    pub const MISSING_LABEL: &'static str = "null";
}

impl fmt::Display for BinaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryValue::Observed(value) => f.write_str(value),
            BinaryValue::Missing => f.write_str(Self::MISSING_LABEL),
        }
    }
}

/// A binary value with its count and share of the total count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryCount {
    pub value: BinaryValue,
    pub count: usize,
    /// `count / total count` (missing entries included in the denominator).
    pub ratio: Ratio,
}

/// Statistics of a binary variable, most frequent value first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryStats {
    pub value1: Option<BinaryCount>,
    pub value2: Option<BinaryCount>,
}

/// Type-specific statistics, one variant per classified type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "stats")]
pub enum VariableStats {
    Empty,
    Constant,
    Unique,
    Binary(BinaryStats),
    Interval(NumericStats),
    Datetime(DatetimeStats),
    Nominal(CategoricalStats),
}

impl VariableStats {
    pub fn classified_type(&self) -> ClassifiedType {
        match self {
            VariableStats::Empty => ClassifiedType::Empty,
            VariableStats::Constant => ClassifiedType::Constant,
            VariableStats::Unique => ClassifiedType::Unique,
            VariableStats::Binary(_) => ClassifiedType::Binary,
            VariableStats::Interval(_) => ClassifiedType::Interval,
            VariableStats::Datetime(_) => ClassifiedType::Datetime,
            VariableStats::Nominal(_) => ClassifiedType::Nominal,
        }
    }
}

/// The complete statistics record of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableProfile {
    pub name: String,
    pub storage: StorageKind,
    pub base: BaseStats,
    #[serde(flatten)]
    pub stats: VariableStats,
}

impl VariableProfile {
    pub fn classified_type(&self) -> ClassifiedType {
        self.stats.classified_type()
    }
}
