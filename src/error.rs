//! Error types for Stockpile
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StockError
pub type Result<T> = std::result::Result<T, StockError>;

/// Unified error type for Stockpile operations
#[derive(Debug, Error)]
pub enum StockError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("File has no header line: {}", .0.display())]
    MissingHeader(PathBuf),

    #[error("Malformed record at {}:{line}: expected 4 fields, found {fields}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        fields: usize,
    },

    // -------------------------------------------------------------------------
    // Encoding Errors
    // -------------------------------------------------------------------------
    #[error("CSV error: {0}")]
    Csv(String),

    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl StockError {
    /// Map an I/O error from opening `path`, turning a missing file into `NotFound`
    pub(crate) fn from_open(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            StockError::NotFound(path.into())
        } else {
            StockError::Io(err)
        }
    }

    /// True for the recoverable "create it first" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, StockError::NotFound(_))
    }
}

impl From<csv::Error> for StockError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return StockError::Csv(err.to_string());
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io) => StockError::Io(io),
            other => StockError::Csv(format!("{:?}", other)),
        }
    }
}
