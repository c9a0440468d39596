//! CLI argument definitions for dataprofile.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use dp_core::{DEFAULT_MAX_VALUE_LEN, DEFAULT_SEED, ProfileOptions};
use dp_ingest::IngestOptions;
use dp_report::{ReportFormat, ReportOptions};

#[derive(Parser)]
#[command(
    name = "dataprofile",
    version,
    about = "Profile tabular datasets",
    long_about = "Profile CSV datasets: classify every column, compute per-type \
                  statistics and cross-tabulate binary variables.\n\n\
                  Reports render as text, Markdown, HTML or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Profile one CSV file and print or save the report.
    Profile(ProfileArgs),

    /// Profile every CSV file in a directory.
    Batch(BatchArgs),

    /// Print the per-variable summary table of one CSV file.
    Summary(SummaryArgs),
}

/// Profiling settings shared by all commands.
#[derive(Args, Clone)]
pub struct ProfilingArgs {
    /// Profile a random sample of this many rows.
    #[arg(long = "sample-size", value_name = "ROWS")]
    pub sample_size: Option<usize>,

    /// Seed for the row sample.
    #[arg(long = "seed", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Worker threads (default: one per CPU).
    #[arg(long = "workers", value_name = "N")]
    pub workers: Option<usize>,

    /// Truncate categorical values longer than this.
    #[arg(long = "max-value-len", default_value_t = DEFAULT_MAX_VALUE_LEN)]
    pub max_value_len: usize,

    /// Skip confusion matrices between binary variables.
    #[arg(long = "no-confusion-matrix")]
    pub no_confusion_matrix: bool,

    /// Rows scanned to infer column types (default: all).
    #[arg(long = "infer-schema-length", value_name = "ROWS")]
    pub infer_schema_length: Option<usize>,

    /// Source encoding of the CSV file, e.g. latin1 or windows-1252 (default: UTF-8).
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encoding: Option<String>,
}

impl ProfilingArgs {
    pub fn profile_options(&self) -> ProfileOptions {
        ProfileOptions::default()
            .with_sample_size(self.sample_size)
            .with_seed(self.seed)
            .with_workers(self.workers)
            .with_max_value_len(self.max_value_len)
            .with_confusion_matrices(!self.no_confusion_matrix)
    }

    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions::default()
            .with_infer_schema_length(self.infer_schema_length)
            .with_encoding(self.encoding.clone())
    }
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// CSV file to profile.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub profiling: ProfilingArgs,

    /// Variables per statistics table.
    #[arg(long = "var-per-row", default_value_t = 6)]
    pub var_per_row: usize,

    /// Write the report here; the extension picks the format (txt, md, html, json).
    #[arg(long = "output", short = 'o', value_name = "PATH", conflicts_with = "save")]
    pub output: Option<PathBuf>,

    /// Save a text report as report_<name>.txt beside the input.
    #[arg(long = "save")]
    pub save: bool,
}

impl ProfileArgs {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions::default().with_var_per_row(self.var_per_row)
    }
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Directory containing CSV files.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Descend into subdirectories.
    #[arg(long = "recursive", short = 'r')]
    pub recursive: bool,

    /// Report format for every file.
    #[arg(long = "format", value_enum, default_value = "txt")]
    pub format: ReportFormatArg,

    /// Directory for the reports (default: beside each input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub profiling: ProfilingArgs,

    /// Variables per statistics table.
    #[arg(long = "var-per-row", default_value_t = 6)]
    pub var_per_row: usize,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// CSV file to summarize.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub profiling: ProfilingArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Txt,
    Md,
    Html,
    Json,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(arg: ReportFormatArg) -> Self {
        match arg {
            ReportFormatArg::Txt => ReportFormat::Text,
            ReportFormatArg::Md => ReportFormat::Markdown,
            ReportFormatArg::Html => ReportFormat::Html,
            ReportFormatArg::Json => ReportFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_flags() {
        let cli = Cli::try_parse_from([
            "dataprofile",
            "profile",
            "titanic.csv",
            "--sample-size",
            "100",
            "--workers",
            "0",
            "--no-confusion-matrix",
            "-o",
            "report.html",
        ])
        .unwrap();

        let Command::Profile(args) = cli.command else {
            panic!("expected profile command");
        };
        let options = args.profiling.profile_options();
        assert_eq!(options.sample_size, Some(100));
        assert_eq!(options.seed, 2018);
        assert_eq!(options.workers, None);
        assert!(!options.confusion_matrices);
        assert_eq!(args.output, Some(PathBuf::from("report.html")));
        assert_eq!(args.report_options().var_per_row, 6);
    }

    #[test]
    fn test_output_conflicts_with_save() {
        let result = Cli::try_parse_from([
            "dataprofile",
            "profile",
            "titanic.csv",
            "--save",
            "--output",
            "x.md",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_batch_format() {
        let cli =
            Cli::try_parse_from(["dataprofile", "batch", "data", "-r", "--format", "md"]).unwrap();
        let Command::Batch(args) = cli.command else {
            panic!("expected batch command");
        };
        assert!(args.recursive);
        assert_eq!(ReportFormat::from(args.format), ReportFormat::Markdown);
        assert_eq!(args.profiling.ingest_options().encoding, None);
    }

    #[test]
    fn test_encoding_flag() {
        let cli = Cli::try_parse_from([
            "dataprofile",
            "summary",
            "titanic.csv",
            "--encoding",
            "latin1",
        ])
        .unwrap();
        let Command::Summary(args) = cli.command else {
            panic!("expected summary command");
        };
        let options = args.profiling.ingest_options();
        assert_eq!(options.encoding.as_deref(), Some("latin1"));
    }
}
