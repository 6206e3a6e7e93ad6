//! Error types for measurement file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a measurement table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Measurement file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// The delimited reader rejected a record.
    #[error("malformed record in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row has a different number of columns than the first row.
    #[error("{path}:{line}: expected {expected} columns, found {found}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A token could not be parsed as a number.
    #[error("{path}:{line}: column {column} is not a number: '{token}'")]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        column: usize,
        token: String,
    },
}

impl IngestError {
    /// True for malformed file contents.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::Csv { .. } | Self::RaggedRow { .. } | Self::InvalidNumber { .. }
        )
    }

    /// True when the file itself could not be read.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::FileRead { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
