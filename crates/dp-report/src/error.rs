//! Error types for report rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering or saving a report.
#[derive(Debug, Error)]
pub enum ReportError {
    // === Destination Errors ===
    /// The output path has no extension mapping to a report format.
    #[error("unsupported report extension for {}: expected txt, md, html or json", path.display())]
    UnsupportedExtension { path: PathBuf },

    /// Writing the rendered report failed.
    #[error("failed to write report {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Rendering Errors ===
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTML writer rejected an event.
    #[error("HTML rendering failed: {0}")]
    Html(String),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
