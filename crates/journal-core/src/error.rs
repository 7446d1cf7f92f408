//! Error types for journal core operations.
//!
//! Every operation returns one of these kinds straight to the invocation
//! boundary. The CLI layer maps them to exit codes.

use thiserror::Error;

/// Result type alias for journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for journal operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Wrong argument count, or an argument that is empty or not parseable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A ledger read failed or a named lookup could not be completed
    #[error("Lookup failed: {0}")]
    LookupFailure(String),

    /// A journal with this key already exists
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A ledger write failed
    #[error("Storage error: {0}")]
    StorageFailure(String),

    /// The dispatcher has no handler for this function name
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// A stored value could not be decoded
    #[error("Deserialization error: {0}")]
    DeserializationFailure(String),
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::DeserializationFailure(err.to_string())
    }
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        JournalError::StorageFailure(err.to_string())
    }
}
