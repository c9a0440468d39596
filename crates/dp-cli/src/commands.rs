use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, info_span};

use dp_cli::pipeline::{
    BatchConfig, BatchEntry, dataset_name, profile_file, report_path_for, run_batch,
    summarize_file,
};
use dp_ingest::{human_readable_size, list_csv_files};
use dp_report::{ReportFormat, render_report, write_report};

use crate::cli::{BatchArgs, ProfileArgs, SummaryArgs};
use crate::summary::{print_batch_summary, print_variable_summary};

/// Profiles one file. The text report goes to stdout unless a destination is
/// given; when saving fails the text report is still printed.
pub fn run_profile(args: &ProfileArgs, styled: bool) -> Result<()> {
    let profile = profile_file(
        &args.file,
        &args.profiling.ingest_options(),
        &args.profiling.profile_options(),
    )?;
    let options = args
        .report_options()
        .with_title(dataset_name(&args.file));

    let destination = match (&args.output, args.save) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(report_path_for(&args.file, ReportFormat::Text, None)),
        (None, false) => None,
    };

    let Some(path) = destination else {
        let text = render_report(&profile, ReportFormat::Text, &options.with_styled(styled))?;
        print!("{text}");
        return Ok(());
    };

    match write_report(&profile, &path, &options) {
        Ok(format) => {
            println!("Report ({format}) saved to {}", path.display());
            Ok(())
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "saving report failed");
            let text = render_report(&profile, ReportFormat::Text, &options)?;
            print!("{text}");
            Err(err).with_context(|| format!("save report to {}", path.display()))
        }
    }
}

/// Profiles every CSV file of a directory, returning whether all succeeded.
pub fn run_batch_command(args: &BatchArgs) -> Result<bool> {
    let span = info_span!("batch", dir = %args.dir.display());
    let _guard = span.enter();

    let files = list_csv_files(&args.dir, args.recursive)
        .with_context(|| format!("list csv files in {}", args.dir.display()))?;
    if files.is_empty() {
        return Err(anyhow!("no CSV files found in {}", args.dir.display()));
    }
    info!(count = files.len(), "profiling csv files");

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output directory {}", dir.display()))?;
    }

    let config = BatchConfig {
        ingest: args.profiling.ingest_options(),
        profile: args.profiling.profile_options(),
        report: dp_report::ReportOptions::default().with_var_per_row(args.var_per_row),
        format: args.format.into(),
        output_dir: args.output_dir.clone(),
    };

    let progress = progress_bar(files.len());
    let entries = run_batch(&files, &config, |entry: &BatchEntry| {
        let size = entry
            .size
            .map_or_else(|| "?".to_string(), human_readable_size);
        progress.println(format!("{} ({size})", entry.input.display()));
        progress.inc(1);
    });
    progress.finish_and_clear();

    print_batch_summary(&entries);
    Ok(entries.iter().all(BatchEntry::is_success))
}

pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    let summary = summarize_file(
        &args.file,
        &args.profiling.ingest_options(),
        &args.profiling.profile_options(),
    )?;
    print_variable_summary(&summary);
    Ok(())
}

fn progress_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {elapsed_precise}")
    {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}
