//! Tokenization, lemmatization, and keyword normalization.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::stopwords::is_stopword;

/// Word tokens: runs of alphanumeric characters. Punctuation and whitespace
/// never produce a token.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap_or_else(|_| unreachable!()));

/// A single word token with its normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased surface form as it appeared in the text.
    pub text: String,
    /// Lemmatized (stemmed) form, always lowercase.
    pub lemma: String,
}

/// Text analyzer wrapping a Porter2 English stemmer.
///
/// Stateless between calls; build one at startup and share it by reference.
pub struct Analyzer {
    stemmer: Stemmer,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer").finish_non_exhaustive()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Creates an analyzer for English text.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// The lemmatized, lowercase form of a single word.
    #[must_use]
    pub fn lemma(&self, word: &str) -> String {
        self.stemmer.stem(&word.to_lowercase()).to_string()
    }

    /// Tokenizes text into lowercase word tokens with lemmas.
    ///
    /// Punctuation and whitespace are discarded by the tokenizer itself.
    #[must_use]
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        WORD_RE
            .find_iter(text)
            .map(|m| {
                let surface = m.as_str().to_lowercase();
                let lemma = self.stemmer.stem(&surface).to_string();
                Token {
                    text: surface,
                    lemma,
                }
            })
            .collect()
    }

    /// Reduces text to a canonical keyword string.
    ///
    /// Tokens are dropped when their surface form or lemma appears in
    /// `exclude` (compared case-insensitively, against both the raw terms
    /// and their lemmas), or when they are stopwords and `keep_stopwords`
    /// is false. Surviving lemmas are joined with single spaces in their
    /// original order. Returns an empty string when nothing survives.
    #[must_use]
    pub fn normalize<S: AsRef<str>>(
        &self,
        text: &str,
        keep_stopwords: bool,
        exclude: &[S],
    ) -> String {
        let mut excluded: HashSet<String> = HashSet::with_capacity(exclude.len() * 2);
        for term in exclude {
            let lower = term.as_ref().to_lowercase();
            excluded.insert(self.stemmer.stem(&lower).to_string());
            excluded.insert(lower);
        }

        let mut lemmas = Vec::new();
        for token in self.tokens(text) {
            if excluded.contains(&token.text) || excluded.contains(&token.lemma) {
                continue;
            }
            if !keep_stopwords && is_stopword(&token.text) {
                continue;
            }
            lemmas.push(token.lemma);
        }
        lemmas.join(" ")
    }
}
