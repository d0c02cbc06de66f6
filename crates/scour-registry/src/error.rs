//! Error types for the collection registry.

use thiserror::Error;

/// Errors that can occur when building or loading a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry was constructed with no collections at all.
    #[error("registry must contain at least one collection")]
    Empty,

    /// A collection name was registered twice.
    #[error("collection '{0}' is already registered")]
    DuplicateCollection(String),

    /// A collection was configured with an empty name.
    #[error("collection name must not be empty")]
    EmptyName,

    /// A collection was configured without any default search fields.
    #[error("collection '{0}' has no default search fields")]
    NoSearchFields(String),

    /// The configuration document could not be parsed.
    #[error("invalid registry configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
