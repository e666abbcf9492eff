//! Error types for data source operations

use thiserror::Error;

/// Errors that can occur while loading a record set
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error while reading a dataset file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record parsed but violates a field constraint
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
