//! Report rendering for dataset profiles.
//!
//! A [`TableProfile`] is laid out once ([`layout`]) and then drawn as plain
//! text, Markdown or HTML. JSON output serializes the profile directly.
//!
//! # Example
//!
//! ```
//! use dp_report::ReportFormat;
//!
//! assert_eq!(ReportFormat::from_path("out/report.md").unwrap(), ReportFormat::Markdown);
//! assert!(ReportFormat::from_path("report.pdf").is_err());
//! ```

pub mod error;
pub mod format;
pub mod html;
pub mod layout;
pub mod text;

use std::fmt;
use std::path::Path;

use dp_model::TableProfile;
use tracing::info;

pub use error::{ReportError, Result};
pub use layout::{Block, Grid, ReportOptions, report_blocks};
pub use text::TableStyle;

/// Output format of a saved report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Markdown,
    Html,
    Json,
}

impl ReportFormat {
    /// Picks the format from a file extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("txt") => Ok(Self::Text),
            Some("md") => Ok(Self::Markdown),
            Some("html") => Ok(Self::Html),
            Some("json") => Ok(Self::Json),
            _ => Err(ReportError::UnsupportedExtension {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Renders a profile in the requested format.
pub fn render_report(
    profile: &TableProfile,
    format: ReportFormat,
    options: &ReportOptions,
) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(text::render_blocks(
            &report_blocks(profile, options),
            TableStyle::Boxed {
                styled: options.styled,
            },
        )),
        ReportFormat::Markdown => Ok(text::render_blocks(
            &report_blocks(profile, options),
            TableStyle::Markdown,
        )),
        ReportFormat::Html => html::render_html(
            &report_blocks(profile, options),
            options.title.as_deref().unwrap_or("Data profile"),
        ),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(profile)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Renders a profile and writes it to `path`, choosing the format from the
/// extension. Styling is never written to files.
pub fn write_report(
    profile: &TableProfile,
    path: impl AsRef<Path>,
    options: &ReportOptions,
) -> Result<ReportFormat> {
    let path = path.as_ref();
    let format = ReportFormat::from_path(path)?;
    let options = options.clone().with_styled(false);
    let rendered = render_report(profile, format, &options)?;
    std::fs::write(path, rendered).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), %format, "report saved");
    Ok(format)
}
