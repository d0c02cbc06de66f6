//! # scour-query
//!
//! Deterministic translation of free-text operator queries into structured,
//! engine-agnostic search requests.
//!
//! This crate provides:
//!
//! - [`Translator`] — The immutable translation façade
//! - [`ParsedQuery`] — The intermediate parsed-query record
//! - [`SearchRequest`] / [`QueryNode`] — The compiled request and its
//!   boolean predicate tree
//! - [`CollectionResolver`] / [`MatchStrategy`] — Two-tier collection
//!   resolution (linguistic phrase match, then substring fallback)
//! - Extraction helpers for time phrases, limit phrases, and keywords
//!
//! Translation never fails: text with no recognizable clauses degrades to a
//! `match_all` request over every registered collection, and identical
//! input always produces structurally identical output.
//!
//! ## Example
//!
//! ```rust
//! use scour_query::Translator;
//! use scour_registry::CollectionRegistry;
//!
//! # fn main() -> scour_query::Result<()> {
//! let translator = Translator::new(CollectionRegistry::builtin())?;
//! let request = translator.translate("failed logins from apache in the last 24 hours top 20");
//!
//! assert_eq!(request.collections, vec!["apache"]);
//! assert_eq!(request.result_limit, 20);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod compile;
pub mod error;
pub mod keyword;
pub mod limit;
pub mod request;
pub mod resolve;
pub mod time;
pub mod translate;
pub mod types;

pub use compile::compile;
pub use error::{Result, TranslateError};
pub use keyword::{FILLER_WORDS, exclusion_terms, normalize_keyword};
pub use limit::{DEFAULT_RESULT_LIMIT, MAX_RESULT_LIMIT, MIN_RESULT_LIMIT, extract_limit};
pub use request::{QueryNode, SearchRequest};
pub use resolve::{CollectionResolver, MatchStrategy, PhraseStrategy, SubstringStrategy};
pub use time::extract_lookback_hours;
pub use translate::{Translator, TranslatorOptions};
pub use types::ParsedQuery;
