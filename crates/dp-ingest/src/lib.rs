//! Dataset ingestion for the profiler.
//!
//! Locates CSV files on disk and loads them into Polars DataFrames with the
//! size and encoding checks applied before parsing.

pub mod csv;
pub mod discovery;
pub mod error;

pub use csv::{
    IngestOptions, MAX_CSV_FILE_SIZE, check_file_size_with_limit, read_csv, resolve_encoding,
    validate_encoding,
};
pub use discovery::{human_readable_size, list_csv_files};
pub use error::{IngestError, Result};
