//! Error types for linguistic analysis.

use thiserror::Error;

/// Errors that can occur when building linguistic components.
#[derive(Debug, Error)]
pub enum LinguaError {
    /// A phrase pattern failed to compile.
    #[error("invalid phrase pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A phrase list contained an empty phrase.
    #[error("phrase for label '{0}' must not be empty")]
    EmptyPhrase(String),
}

/// Result type alias for linguistic operations.
pub type Result<T> = std::result::Result<T, LinguaError>;
