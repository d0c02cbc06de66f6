//! Case-insensitive whole-word phrase recognition.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::error::{LinguaError, Result};

/// A compiled phrase pattern mapped back to its canonical form.
#[derive(Debug)]
struct PhrasePattern {
    canonical: String,
    regex: Regex,
}

/// Immutable phrase matcher.
///
/// Phrases are grouped under labels (e.g. `"collection"`), compiled once at
/// build time, and matched case-insensitively against whole words. Because
/// the matcher cannot be mutated after [`PhraseMatcherBuilder::build`],
/// lookups can never interleave with registration.
#[derive(Debug, Default)]
pub struct PhraseMatcher {
    groups: HashMap<String, Vec<PhrasePattern>>,
}

impl PhraseMatcher {
    /// Starts building a phrase matcher.
    #[must_use]
    pub fn builder() -> PhraseMatcherBuilder {
        PhraseMatcherBuilder::default()
    }

    /// Finds registered phrases occurring in the text under the given label.
    ///
    /// Returns canonical phrases ordered by first occurrence in the text,
    /// de-duplicated. An unknown label yields an empty result.
    #[must_use]
    pub fn find(&self, text: &str, label: &str) -> Vec<String> {
        let Some(patterns) = self.groups.get(label) else {
            return Vec::new();
        };

        let mut occurrences: Vec<(usize, &str)> = Vec::new();
        for pattern in patterns {
            for m in pattern.regex.find_iter(text) {
                occurrences.push((m.start(), pattern.canonical.as_str()));
            }
        }
        occurrences.sort_by_key(|&(start, _)| start);

        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for (_, canonical) in occurrences {
            if seen.insert(canonical.to_lowercase()) {
                found.push(canonical.to_string());
            }
        }
        found
    }
}

/// Builder that compiles phrase groups into a [`PhraseMatcher`].
#[derive(Debug, Default)]
pub struct PhraseMatcherBuilder {
    groups: HashMap<String, Vec<String>>,
}

impl PhraseMatcherBuilder {
    /// Registers phrases under a label. Repeated calls with the same label
    /// append to the group.
    #[must_use]
    pub fn phrases<I, S>(mut self, label: &str, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .entry(label.to_string())
            .or_default()
            .extend(phrases.into_iter().map(Into::into));
        self
    }

    /// Compiles every registered phrase into its matcher pattern.
    ///
    /// Multi-word phrases match across any run of whitespace. Matching is
    /// case-insensitive and anchored at word boundaries, so `"hdfs"` does
    /// not match inside `"xhdfsy"`.
    ///
    /// # Errors
    ///
    /// Returns an error if a phrase is empty or fails to compile.
    pub fn build(self) -> Result<PhraseMatcher> {
        let mut groups = HashMap::with_capacity(self.groups.len());
        for (label, phrases) in self.groups {
            let mut patterns = Vec::with_capacity(phrases.len());
            for phrase in phrases {
                let words: Vec<String> =
                    phrase.split_whitespace().map(|w| regex::escape(w)).collect();
                if words.is_empty() {
                    return Err(LinguaError::EmptyPhrase(label));
                }
                let pattern = format!(r"(?i)\b{}\b", words.join(r"\s+"));
                patterns.push(PhrasePattern {
                    canonical: phrase,
                    regex: Regex::new(&pattern)?,
                });
            }
            groups.insert(label, patterns);
        }
        Ok(PhraseMatcher { groups })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection_matcher() -> PhraseMatcher {
        PhraseMatcher::builder()
            .phrases("collection", ["apache", "hdfs", "thunderbird"])
            .build()
            .expect("valid phrases")
    }

    #[test]
    fn finds_single_phrase() {
        let matcher = collection_matcher();
        assert_eq!(
            matcher.find("show me apache errors", "collection"),
            vec!["apache"]
        );
    }

    #[test]
    fn matching_is_case_insensitive_with_canonical_result() {
        let matcher = collection_matcher();
        assert_eq!(
            matcher.find("errors from APACHE and Hdfs", "collection"),
            vec!["apache", "hdfs"]
        );
    }

    #[test]
    fn results_ordered_by_first_occurrence() {
        let matcher = collection_matcher();
        assert_eq!(
            matcher.find("hdfs then apache then hdfs again", "collection"),
            vec!["hdfs", "apache"]
        );
    }

    #[test]
    fn duplicate_mentions_collapse() {
        let matcher = collection_matcher();
        assert_eq!(
            matcher.find("apache apache apache", "collection"),
            vec!["apache"]
        );
    }

    #[test]
    fn whole_word_only() {
        let matcher = collection_matcher();
        assert!(matcher.find("xhdfsy preapache", "collection").is_empty());
    }

    #[test]
    fn unknown_label_yields_nothing() {
        let matcher = collection_matcher();
        assert!(matcher.find("apache", "nosuch").is_empty());
    }

    #[test]
    fn multi_word_phrases_match_across_whitespace() {
        let matcher = PhraseMatcher::builder()
            .phrases("collection", ["access log"])
            .build()
            .expect("valid phrases");
        assert_eq!(
            matcher.find("the access  log from yesterday", "collection"),
            vec!["access log"]
        );
    }

    #[test]
    fn empty_phrase_rejected() {
        let result = PhraseMatcher::builder()
            .phrases("collection", ["   "])
            .build();
        assert!(matches!(result, Err(LinguaError::EmptyPhrase(_))));
    }

    #[test]
    fn empty_matcher_finds_nothing() {
        let matcher = PhraseMatcher::default();
        assert!(matcher.find("anything", "collection").is_empty());
    }
}
