//! Format-independent report layout.
//!
//! A profile is laid out once as a sequence of [`Block`]s; each output
//! format only decides how a block is drawn.

use chrono::NaiveDate;
use dp_model::{
    BinaryCount, ConfusionMatrix, FrequentValue, Percentiles, TableProfile, TableStats,
    TypeGroup, VariableProfile, VariableStats, VariableSummary,
};

use crate::format::{
    NOT_APPLICABLE, format_count, format_datetime, format_duration, format_float,
    format_optional_count, format_ratio,
};

/// Width of the report banner lines.
pub const BANNER_WIDTH: usize = 90;

/// Width of the section heading lines.
pub const HEADING_WIDTH: usize = 50;

/// A rectangular table of display strings.
///
/// The first header cell labels the row-name column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One element of a laid-out report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Full-width banner opening or closing the report.
    Banner(String),
    /// Section heading.
    Heading(String),
    Paragraph(String),
    Table(Grid),
    /// Vertical space between sections.
    Break,
}

/// Options for laying out a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Variables per statistics table.
    pub var_per_row: usize,
    /// Date printed in the report header; today when unset.
    pub generated_on: Option<NaiveDate>,
    /// Dataset name mentioned in the report header.
    pub title: Option<String>,
    /// Colour and bold table headers in text output.
    pub styled: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            var_per_row: 6,
            generated_on: None,
            title: None,
            styled: false,
        }
    }
}

impl ReportOptions {
    #[must_use]
    pub fn with_var_per_row(mut self, var_per_row: usize) -> Self {
        self.var_per_row = var_per_row.max(1);
        self
    }

    #[must_use]
    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }
}

/// Lays out the full report for a profile.
pub fn report_blocks(profile: &TableProfile, options: &ReportOptions) -> Vec<Block> {
    let date = options
        .generated_on
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let subject = options
        .title
        .as_deref()
        .map_or_else(String::new, |title| format!(" for {title}"));

    let mut blocks = vec![
        Block::Banner(" Beginning of report ".to_string()),
        Block::Paragraph(format!(
            "This report{subject} was created by dataprofile on {}",
            date.format("%A, %b %d, %Y")
        )),
        Block::Heading(" Table Statistics ".to_string()),
        Block::Table(table_stats_grid(&profile.table_stats)),
        Block::Break,
        Block::Heading(" Variable Summary ".to_string()),
        Block::Table(var_summary_grid(&profile.var_summary)),
        Block::Break,
        Block::Heading(" Variable Statistics ".to_string()),
    ];

    for group in &profile.var_stats {
        blocks.push(Block::Paragraph(format!(
            "{} variables:",
            group.classified_type
        )));
        blocks.extend(
            var_stats_grids(group, options.var_per_row)
                .into_iter()
                .map(Block::Table),
        );
    }
    blocks.push(Block::Break);

    if !profile.conf_matrix.is_empty() {
        blocks.push(Block::Heading(" Confusion Matrix ".to_string()));
        for matrix in &profile.conf_matrix {
            blocks.push(Block::Paragraph(format!(
                "row:{} - col:{}",
                matrix.row_variable, matrix.column_variable
            )));
            blocks.push(Block::Table(confusion_grid(matrix)));
        }
    }

    blocks.push(Block::Banner(" End of report ".to_string()));
    blocks
}

/// `n_row`, `n_col`, ... against their counts.
pub fn table_stats_grid(stats: &TableStats) -> Grid {
    Grid {
        header: vec![String::new(), "count".to_string()],
        rows: stats
            .entries()
            .into_iter()
            .map(|(name, count)| vec![name, format_count(count)])
            .collect(),
    }
}

const SUMMARY_COLUMNS: [&str; 7] = [
    "type",
    "data_type",
    "count",
    "n_missing",
    "p_missing",
    "n_unique",
    "p_unique",
];

/// One row per variable with its type, storage and base statistics.
pub fn var_summary_grid(summary: &[VariableSummary]) -> Grid {
    let mut header = vec![String::new()];
    header.extend(SUMMARY_COLUMNS.iter().map(|c| (*c).to_string()));

    let rows = summary
        .iter()
        .map(|row| {
            vec![
                row.name.clone(),
                row.classified_type.to_string(),
                row.storage.display_kind().to_string(),
                format_count(row.base.count),
                format_count(row.base.n_missing),
                format_ratio(row.base.p_missing),
                format_optional_count(row.base.n_unique),
                format_ratio(row.base.p_unique),
            ]
        })
        .collect();

    Grid { header, rows }
}

fn percentile_rows<T: Copy>(
    percentiles: Option<&Percentiles<T>>,
    format: impl Fn(T) -> String,
) -> Vec<(String, String)> {
    let labels = ["5%", "25%", "50%", "75%", "95%"];
    match percentiles {
        Some(p) => p
            .labelled()
            .into_iter()
            .map(|(label, value)| (label.to_string(), format(value)))
            .collect(),
        None => labels
            .into_iter()
            .map(|label| (label.to_string(), NOT_APPLICABLE.to_string()))
            .collect(),
    }
}

fn binary_rows(rank: &str, side: Option<&BinaryCount>) -> [(String, String); 3] {
    let (value, count, ratio) = match side {
        Some(side) => (
            side.value.to_string(),
            format_count(side.count),
            format_ratio(side.ratio),
        ),
        None => (
            NOT_APPLICABLE.to_string(),
            NOT_APPLICABLE.to_string(),
            NOT_APPLICABLE.to_string(),
        ),
    };
    [
        (format!("value{rank}"), value),
        (format!("n_value{rank}"), count),
        (format!("p_value{rank}"), ratio),
    ]
}

fn frequent_rows(
    value_label: &str,
    freq_label: &str,
    entry: Option<&FrequentValue>,
) -> Vec<(String, String)> {
    match entry {
        Some(entry) => vec![
            (value_label.to_string(), entry.value.clone()),
            (freq_label.to_string(), format_count(entry.freq)),
        ],
        None => Vec::new(),
    }
}

/// Named display values of every statistic of one variable, in report order.
pub fn statistic_rows(profile: &VariableProfile) -> Vec<(String, String)> {
    let base = &profile.base;
    let mut rows = vec![
        ("count".to_string(), format_count(base.count)),
        ("n_missing".to_string(), format_count(base.n_missing)),
        ("p_missing".to_string(), format_ratio(base.p_missing)),
        ("n_unique".to_string(), format_optional_count(base.n_unique)),
        ("p_unique".to_string(), format_ratio(base.p_unique)),
        (
            "data_type".to_string(),
            profile.storage.display_kind().to_string(),
        ),
    ];

    match &profile.stats {
        VariableStats::Empty | VariableStats::Constant | VariableStats::Unique => {}
        VariableStats::Binary(stats) => {
            rows.extend(binary_rows("1", stats.value1.as_ref()));
            rows.extend(binary_rows("2", stats.value2.as_ref()));
        }
        VariableStats::Interval(stats) => {
            rows.push(("mean".to_string(), format_float(stats.mean)));
            rows.push(("std".to_string(), format_float(stats.std)));
            rows.push(("variance".to_string(), format_float(stats.variance)));
            rows.push(("min".to_string(), format_float(stats.min)));
            rows.extend(percentile_rows(Some(&stats.percentiles), format_float));
            rows.push(("max".to_string(), format_float(stats.max)));
            rows.push(("range".to_string(), format_float(stats.range)));
            rows.push(("iqr".to_string(), format_float(stats.iqr)));
            rows.push(("kurtosis".to_string(), format_float(stats.kurtosis)));
            rows.push(("skewness".to_string(), format_float(stats.skewness)));
            rows.push(("sum".to_string(), format_float(stats.sum)));
            rows.push((
                "mean_abs_dev".to_string(),
                format_float(stats.mean_abs_dev),
            ));
            rows.push((
                "coeff_of_var".to_string(),
                format_float(stats.coeff_of_variation),
            ));
        }
        VariableStats::Datetime(stats) => {
            let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_APPLICABLE.to_string());
            rows.push(("min".to_string(), or_na(stats.min.map(format_datetime))));
            rows.extend(percentile_rows(stats.percentiles.as_ref(), format_datetime));
            rows.push(("max".to_string(), or_na(stats.max.map(format_datetime))));
            rows.push(("range".to_string(), or_na(stats.range.map(format_duration))));
            rows.extend(
                stats
                    .day_of_week
                    .labelled()
                    .into_iter()
                    .map(|(label, count)| (label.to_string(), format_count(count))),
            );
        }
        VariableStats::Nominal(stats) => {
            rows.extend(frequent_rows("mode", "mode_freq", stats.mode.as_ref()));
            rows.extend(frequent_rows(
                "2nd_freq_value",
                "2nd_freq",
                stats.second.as_ref(),
            ));
            rows.extend(frequent_rows(
                "3rd_freq_value",
                "3rd_freq",
                stats.third.as_ref(),
            ));
        }
    }

    rows
}

/// Statistics tables of one type group, `var_per_row` variables each.
///
/// Rows are statistic names and columns are variables. A statistic missing
/// for one variable (a third most frequent value, say) is left blank.
pub fn var_stats_grids(group: &TypeGroup, var_per_row: usize) -> Vec<Grid> {
    group
        .variables
        .chunks(var_per_row.max(1))
        .map(|chunk| {
            let per_variable: Vec<Vec<(String, String)>> =
                chunk.iter().map(statistic_rows).collect();

            let mut names: Vec<&str> = Vec::new();
            for rows in &per_variable {
                for (name, _) in rows {
                    if !names.contains(&name.as_str()) {
                        names.push(name);
                    }
                }
            }

            let mut header = vec![String::new()];
            header.extend(chunk.iter().map(|profile| profile.name.clone()));

            let rows = names
                .iter()
                .map(|name| {
                    let mut row = vec![(*name).to_string()];
                    row.extend(per_variable.iter().map(|rows| {
                        rows.iter()
                            .find(|(n, _)| n == name)
                            .map(|(_, value)| value.clone())
                            .unwrap_or_default()
                    }));
                    row
                })
                .collect();

            Grid { header, rows }
        })
        .collect()
}

/// Contingency table with row labels in the first column.
pub fn confusion_grid(matrix: &ConfusionMatrix) -> Grid {
    let mut header = vec![String::new()];
    header.extend(matrix.column_labels.iter().map(ToString::to_string));

    let rows = matrix
        .row_labels
        .iter()
        .zip(&matrix.counts)
        .map(|(label, counts)| {
            let mut row = vec![label.to_string()];
            row.extend(counts.iter().map(|&count| format_count(count)));
            row
        })
        .collect();

    Grid { header, rows }
}
