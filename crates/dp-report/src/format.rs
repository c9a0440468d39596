//! Display formatting of statistic values.

use chrono::{NaiveDateTime, TimeDelta};
use dp_model::Ratio;

/// Shown for undefined ratios and absent values.
pub const NOT_APPLICABLE: &str = "N/A";

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a count with thousands separators.
///
/// ```
/// assert_eq!(dp_report::format::format_count(1757), "1,757");
/// assert_eq!(dp_report::format::format_count(891), "891");
/// ```
pub fn format_count(n: usize) -> String {
    group_thousands(&n.to_string())
}

/// Formats an optional count, `N/A` when absent.
pub fn format_optional_count(n: Option<usize>) -> String {
    n.map_or_else(|| NOT_APPLICABLE.to_string(), format_count)
}

/// Formats a float with four decimals and thousands separators.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let formatted = format!("{:.4}", v.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "0000"));
    let sign = if v < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{}.{frac_part}", group_thousands(int_part))
}

/// Formats a ratio as a percentage with two decimals.
///
/// ```
/// use dp_report::format::format_ratio;
///
/// assert_eq!(format_ratio(Some(0.771)), "77.10%");
/// assert_eq!(format_ratio(None), "N/A");
/// ```
pub fn format_ratio(ratio: Ratio) -> String {
    match ratio {
        Some(r) => format!("{:.2}%", r * 100.0),
        None => NOT_APPLICABLE.to_string(),
    }
}

pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Formats a duration as `<days> days <hh:mm:ss>`.
pub fn format_duration(delta: TimeDelta) -> String {
    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let total = delta.num_seconds().unsigned_abs();
    let days = total / 86_400;
    let rest = total % 86_400;
    format!(
        "{sign}{days} days {:02}:{:02}:{:02}",
        rest / 3_600,
        (rest % 3_600) / 60,
        rest % 60
    )
}

/// Centres `text` in a line of `width` characters padded with `fill`.
///
/// An odd padding puts the extra fill character on the right.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let padding = width - len;
    let left = padding / 2;
    let right = padding - left;
    let fill_str = fill.to_string();
    format!("{}{text}{}", fill_str.repeat(left), fill_str.repeat(right))
}
