//! Per-type statistics calculators.
//!
//! - [`base`]: count, missing and uniqueness figures for every column
//! - [`numeric`]: moments, percentiles and spread of interval columns
//! - [`datetime`]: extrema, percentiles and weekday histogram
//! - [`categorical`]: the three most frequent values
//! - [`binary`]: the two categories with counts and ratios
//! - [`frequency`]: stable value counting shared by the above

pub mod base;
pub mod binary;
pub mod categorical;
pub mod datetime;
pub mod frequency;
pub mod numeric;

pub use base::base_stats;
pub use binary::binary_stats;
pub use categorical::{categorical_stats, truncate_value};
pub use datetime::datetime_stats;
pub use frequency::ValueCounts;
pub use numeric::{numeric_stats, quantile_sorted};
