//! Error types for corpus ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the question corpus.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Corpus path does not exist.
    #[error("corpus path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// Directory contains no CSV partitions.
    #[error("no CSV files found in {path}")]
    NoCsvFiles { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    // === Row Errors ===
    /// A data row failed coercion or validation.
    #[error("invalid row at {path}:{line}: {reason}")]
    InvalidRow {
        path: PathBuf,
        line: u64,
        reason: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
