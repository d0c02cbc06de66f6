//! Error types for query translation.

use thiserror::Error;

/// Errors that can occur while building a translator.
///
/// Translation itself is infallible: every input text yields a valid
/// search request. Only startup configuration can fail.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Collection names could not be compiled into phrase patterns.
    #[error("phrase matcher construction failed: {0}")]
    Matcher(#[from] scour_lingua::LinguaError),
}

/// Result type alias for translator construction.
pub type Result<T> = std::result::Result<T, TranslateError>;
