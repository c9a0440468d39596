//! Interval (numeric) variable statistics.

use dp_model::{NumericStats, PERCENTILE_LEVELS, Percentiles};

/// Linear-interpolated quantile of sorted values, `q` in `[0, 1]`.
///
/// Position `q * (n - 1)` between the two nearest ranks.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
    }
}

/// Computes the interval statistics of the non-missing values of a column.
///
/// Variance and standard deviation use the sample (n - 1) denominator.
/// Skewness needs three values and kurtosis four; with fewer they are `NaN`,
/// and both are zero when every value is the same.
pub fn numeric_stats(values: &[f64]) -> NumericStats {
    let n = values.len();
    let nf = n as f64;

    let sum: f64 = values.iter().sum();
    let mean = if n == 0 { f64::NAN } else { sum / nf };

    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    let mut abs_dev = 0.0;
    for &x in values {
        let d = x - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
        abs_dev += d.abs();
    }

    let variance = if n < 2 { f64::NAN } else { m2 / (nf - 1.0) };
    let std = variance.sqrt();

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let min = sorted.first().copied().unwrap_or(f64::NAN);
    let max = sorted.last().copied().unwrap_or(f64::NAN);

    let percentiles =
        Percentiles::from_array(PERCENTILE_LEVELS.map(|q| quantile_sorted(&sorted, q)));

    let skewness = if n < 3 {
        f64::NAN
    } else if m2 == 0.0 {
        0.0
    } else {
        (nf * (nf - 1.0).sqrt() / (nf - 2.0)) * (m3 / m2.powf(1.5))
    };

    let kurtosis = if n < 4 {
        f64::NAN
    } else if m2 == 0.0 {
        0.0
    } else {
        let numerator = nf * (nf + 1.0) * (nf - 1.0) * m4;
        let denominator = (nf - 2.0) * (nf - 3.0) * m2 * m2;
        let adjustment = 3.0 * (nf - 1.0).powi(2) / ((nf - 2.0) * (nf - 3.0));
        numerator / denominator - adjustment
    };

    NumericStats {
        mean,
        std,
        variance,
        min,
        max,
        range: max - min,
        iqr: percentiles.p75 - percentiles.p25,
        percentiles,
        kurtosis,
        skewness,
        sum,
        mean_abs_dev: if n == 0 { f64::NAN } else { abs_dev / nf },
        coeff_of_variation: if mean == 0.0 { f64::NAN } else { std / mean },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_one_to_five() {
        let stats = numeric_stats(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(stats.mean, 3.0);
        assert!(close(stats.variance, 2.5));
        assert!(close(stats.std, 2.5_f64.sqrt()));
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.range, 4.0);
        assert_eq!(stats.sum, 15.0);
        assert!(close(stats.mean_abs_dev, 1.2));
        assert!(close(stats.skewness, 0.0));
        assert!(close(stats.kurtosis, -1.2));
        assert!(close(stats.percentiles.p5, 1.2));
        assert!(close(stats.percentiles.p25, 2.0));
        assert!(close(stats.percentiles.p50, 3.0));
        assert!(close(stats.percentiles.p95, 4.8));
        assert!(close(stats.iqr, 2.0));
        assert!(close(stats.coeff_of_variation, 2.5_f64.sqrt() / 3.0));
    }

    #[test]
    fn test_zero_mean_has_nan_cv() {
        let stats = numeric_stats(&[-1.0, 0.0, 1.0]);
        assert_eq!(stats.mean, 0.0);
        assert!(stats.coeff_of_variation.is_nan());
        assert!(stats.kurtosis.is_nan());
        assert!(close(stats.skewness, 0.0));
    }

    #[test]
    fn test_skewed_values() {
        let stats = numeric_stats(&[1.0, 1.0, 1.0, 10.0]);
        assert!(stats.skewness > 0.0);
        assert_eq!(stats.range, stats.max - stats.min);
        assert_eq!(stats.iqr, stats.percentiles.p75 - stats.percentiles.p25);
    }

    #[test]
    fn test_empty_input() {
        let stats = numeric_stats(&[]);
        assert!(stats.mean.is_nan());
        assert!(stats.min.is_nan());
        assert!(stats.percentiles.p50.is_nan());
    }
}
