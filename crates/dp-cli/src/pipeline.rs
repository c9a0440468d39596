//! File-level profiling steps shared by the CLI commands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use dp_core::{ProfileOptions, profile_table, table_from_dataframe, variable_summary};
use dp_ingest::{IngestOptions, read_csv};
use dp_model::{Table, TableProfile, VariableSummary};
use dp_report::{ReportFormat, ReportOptions, write_report};
use tracing::{info, info_span, warn};

/// Dataset name used in report headers: the file stem.
pub fn dataset_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("dataset")
        .to_string()
}

/// `report_<stem>.<ext>` in `dir`, or beside the input when `dir` is `None`.
pub fn report_path_for(input: &Path, format: ReportFormat, dir: Option<&Path>) -> PathBuf {
    let file_name = format!("report_{}.{}", dataset_name(input), format.extension());
    match dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Reads a CSV file into a profiling table.
pub fn load_table(path: &Path, ingest: &IngestOptions) -> Result<Table> {
    let df = read_csv(path, ingest).with_context(|| format!("read {}", path.display()))?;
    table_from_dataframe(&df).with_context(|| format!("convert {}", path.display()))
}

/// Reads and profiles one CSV file.
pub fn profile_file(
    path: &Path,
    ingest: &IngestOptions,
    options: &ProfileOptions,
) -> Result<TableProfile> {
    let span = info_span!("profile", file = %path.display());
    let _guard = span.enter();

    let started = Instant::now();
    let table = load_table(path, ingest)?;
    let profile = profile_table(&table, options)
        .with_context(|| format!("profile {}", path.display()))?;
    info!(
        rows = profile.table_stats.n_row,
        columns = profile.table_stats.n_col,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "profiled"
    );
    Ok(profile)
}

/// Reads a CSV file and returns only the flattened variable summary.
pub fn summarize_file(
    path: &Path,
    ingest: &IngestOptions,
    options: &ProfileOptions,
) -> Result<Vec<VariableSummary>> {
    let table = load_table(path, ingest)?;
    variable_summary(&table, options).with_context(|| format!("summarize {}", path.display()))
}

/// Outcome of profiling one file in batch mode.
#[derive(Debug)]
pub struct BatchEntry {
    pub input: PathBuf,
    /// File size in bytes, when it could be read.
    pub size: Option<u64>,
    /// Saved report path, or the error chain.
    pub outcome: std::result::Result<PathBuf, String>,
}

impl BatchEntry {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Settings shared by every file of a batch.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub ingest: IngestOptions,
    pub profile: ProfileOptions,
    pub report: ReportOptions,
    pub format: ReportFormat,
    /// Directory for reports; beside each input when `None`.
    pub output_dir: Option<PathBuf>,
}

fn profile_and_save(input: &Path, config: &BatchConfig) -> Result<PathBuf> {
    let profile = profile_file(input, &config.ingest, &config.profile)?;
    let path = report_path_for(input, config.format, config.output_dir.as_deref());
    let options = config.report.clone().with_title(dataset_name(input));
    write_report(&profile, &path, &options)?;
    Ok(path)
}

/// Profiles every file in turn. A failing file is recorded and the batch
/// moves on; `on_entry` sees each entry as soon as it is done.
pub fn run_batch(
    files: &[PathBuf],
    config: &BatchConfig,
    mut on_entry: impl FnMut(&BatchEntry),
) -> Vec<BatchEntry> {
    let mut entries = Vec::with_capacity(files.len());
    for input in files {
        let size = std::fs::metadata(input).map(|meta| meta.len()).ok();
        let outcome = profile_and_save(input, config).map_err(|error| {
            let message = format!("{error:#}");
            warn!(file = %input.display(), error = %message, "profiling failed");
            message
        });
        let entry = BatchEntry {
            input: input.clone(),
            size,
            outcome,
        };
        on_entry(&entry);
        entries.push(entry);
    }
    entries
}
