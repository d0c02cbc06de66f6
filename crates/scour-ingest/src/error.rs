//! Error types for log conversion and bulk emission.

use thiserror::Error;

/// Errors that can occur while converting logs or writing bulk records.
///
/// Per-line parse failures are not errors: the conversion drivers skip
/// malformed lines and keep going.
#[derive(Debug, Error)]
pub enum IngestError {
    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document failed to serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
