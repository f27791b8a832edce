//! Error types for batch table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing batch CSV files.
///
/// These are boundary errors; a table that parses but has no zero cell is
/// not an ingestion failure and surfaces through the classifier instead.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read or parse the CSV file.
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: &'static str, path: PathBuf },

    /// Cell value is not a non-negative integer.
    #[error("invalid count '{value}' for column '{column}' in {path} row {row}")]
    InvalidCell {
        column: &'static str,
        value: String,
        row: usize,
        path: PathBuf,
    },

    /// Failed to write the classified CSV file.
    #[error("failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to flush the classified CSV file.
    #[error("failed to write CSV {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
