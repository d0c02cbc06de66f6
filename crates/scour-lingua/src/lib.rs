//! # scour-lingua
//!
//! Linguistic analysis primitives used by the Scour query translator.
//!
//! This crate provides:
//!
//! - [`Analyzer`] — Tokenization, lemmatization, and keyword normalization
//! - [`PhraseMatcher`] — Case-insensitive whole-word phrase recognition
//! - [`is_stopword`] — Stopword classification for English query text
//!
//! Phrase patterns are compiled once through [`PhraseMatcher::builder`] and
//! the resulting matcher is immutable, so lookups can never race with
//! registration. Lemmatization uses Porter2 English stemming; stems are
//! always lowercase.
//!
//! ## Example
//!
//! ```rust
//! use scour_lingua::{Analyzer, PhraseMatcher};
//!
//! # fn main() -> Result<(), scour_lingua::LinguaError> {
//! let matcher = PhraseMatcher::builder()
//!     .phrases("collection", ["apache", "hdfs"])
//!     .build()?;
//! assert_eq!(matcher.find("errors from Apache today", "collection"), vec!["apache"]);
//!
//! let analyzer = Analyzer::new();
//! let keyword = analyzer.normalize("Show me failed logins", false, &["show"]);
//! assert_eq!(keyword, "fail login");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analyzer;
pub mod error;
pub mod phrase;
pub mod stopwords;

pub use analyzer::{Analyzer, Token};
pub use error::{LinguaError, Result};
pub use phrase::{PhraseMatcher, PhraseMatcherBuilder};
pub use stopwords::is_stopword;
