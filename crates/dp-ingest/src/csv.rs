//! CSV file reading into Polars DataFrames.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use encoding_rs::Encoding;
use polars::prelude::*;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Options for loading a CSV file.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Rows scanned for schema inference; `None` scans the whole file.
    pub infer_schema_length: Option<usize>,
    /// Files larger than this are rejected before parsing.
    pub max_file_size: u64,
    /// Source encoding label (e.g. `latin1`, `windows-1252`); `None` reads
    /// the file as UTF-8.
    pub encoding: Option<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            infer_schema_length: None,
            max_file_size: MAX_CSV_FILE_SIZE,
            encoding: None,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }

    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, label: Option<String>) -> Self {
        self.encoding = label;
        self
    }
}

/// Resolves an encoding label such as `latin1` or `utf-16le`.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| IngestError::UnknownEncoding {
        label: label.to_string(),
    })
}

/// Reads the whole file and transcodes it to UTF-8.
///
/// A byte order mark in the file overrides the requested encoding;
/// malformed sequences become U+FFFD.
fn transcode_file(path: &Path, encoding: &'static Encoding) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|e| open_error(path, e))?;
    let (text, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        warn!(
            path = %path.display(),
            encoding = used.name(),
            "malformed byte sequences replaced while decoding"
        );
    }
    debug!(path = %path.display(), encoding = used.name(), "csv transcoded to utf-8");
    Ok(text.into_owned().into_bytes())
}

fn parse_error(path: &Path, e: &PolarsError) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check file size against a limit and return the size in bytes.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(metadata.len())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads a CSV file with a single header row into a Polars DataFrame.
///
/// Empty fields become nulls. Column types are inferred by Polars; text
/// columns holding dates stay textual and are recognised later by the
/// classifier. With an explicit encoding the file is transcoded to UTF-8
/// before parsing; otherwise UTF-16 files are rejected.
pub fn read_csv(path: &Path, options: &IngestOptions) -> Result<DataFrame> {
    let encoding = options
        .encoding
        .as_deref()
        .map(resolve_encoding)
        .transpose()?;
    let size = check_file_size_with_limit(path, options.max_file_size)?;
    if size == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let read_options = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(options.infer_schema_length);
    let df = match encoding {
        Some(encoding) => {
            let decoded = transcode_file(path, encoding)?;
            read_options
                .into_reader_with_file_handle(Cursor::new(decoded))
                .finish()
        }
        None => {
            validate_encoding(path)?;
            read_options
                .try_into_reader_with_file_path(Some(path.to_path_buf()))
                .map_err(|e| parse_error(path, &e))?
                .finish()
        }
    }
    .map_err(|e| parse_error(path, &e))?;

    if df.width() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if df.width() > 500 {
        warn!(
            path = %path.display(),
            columns = df.width(),
            "dataset has more than 500 columns, profiling may be slow"
        );
    }
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "csv loaded"
    );

    Ok(df)
}
