//! CLI error types.

use thiserror::Error;

/// Errors surfaced by CLI commands.
///
/// Startup failures (a bad registry file, unparseable phrase patterns) are
/// fatal; per-query failures inside the interactive loop are printed and the
/// session continues.
#[derive(Debug, Error)]
pub enum CliError {
    /// The collection registry could not be built or loaded.
    #[error("registry error: {0}")]
    Registry(#[from] scour_registry::RegistryError),

    /// The translator could not be constructed.
    #[error("translator error: {0}")]
    Translator(#[from] scour_query::TranslateError),

    /// Log conversion failed.
    #[error("conversion error: {0}")]
    Ingest(#[from] scour_ingest::IngestError),

    /// The engine request could not be sent or read.
    #[error("engine request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The engine answered with a non-success status.
    #[error("engine returned HTTP {status}: {body}")]
    Engine {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// A value failed to serialize for output.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
