//! The translator's intermediate parsed-query record.

use serde::Serialize;

use crate::limit::DEFAULT_RESULT_LIMIT;

/// Result of parsing one free-text query, before compilation.
///
/// Created once per input text and consumed immediately by the query
/// compiler. `collections: None` means "search all registered collections".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    /// Collections the query targets, or `None` for all registered ones.
    pub collections: Option<Vec<String>>,
    /// Relative lookback window in whole hours.
    pub lookback_hours: Option<u64>,
    /// Canonical lemmatized keyword string, when any content words survive.
    pub keyword: Option<String>,
    /// Result-size bound, always within [1, 1000].
    pub result_limit: u32,
}

impl Default for ParsedQuery {
    fn default() -> Self {
        Self {
            collections: None,
            lookback_hours: None,
            keyword: None,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}
