//! Keyword normalization: what remains of a query once time, limit, and
//! collection mentions are accounted for.

use scour_lingua::Analyzer;
use scour_registry::CollectionRegistry;

/// Boilerplate words that never carry search intent in an operator query.
pub const FILLER_WORDS: [&str; 10] = [
    "show", "list", "all", "logs", "events", "entries", "from", "the", "in", "of",
];

/// The exclusion list for a registry: every collection name plus the fixed
/// filler words. Computed once when the translator is built.
#[must_use]
pub fn exclusion_terms(registry: &CollectionRegistry) -> Vec<String> {
    let mut terms: Vec<String> = registry
        .names()
        .into_iter()
        .map(str::to_lowercase)
        .collect();
    terms.extend(FILLER_WORDS.iter().map(|w| (*w).to_string()));
    terms
}

/// Reduces span-stripped query text to a canonical keyword string.
///
/// The input must already have time-range and limit phrase spans removed.
/// Returns `None` when no content words survive normalization.
#[must_use]
pub fn normalize_keyword(
    analyzer: &Analyzer,
    stripped_text: &str,
    keep_stopwords: bool,
    exclude: &[String],
) -> Option<String> {
    let keyword = analyzer.normalize(stripped_text, keep_stopwords, exclude);
    if keyword.is_empty() {
        None
    } else {
        Some(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusion_terms_cover_registry_and_fillers() {
        let registry = CollectionRegistry::builtin();
        let terms = exclusion_terms(&registry);
        for expected in ["apache", "hdfs", "thunderbird", "show", "logs", "of"] {
            assert!(terms.iter().any(|t| t == expected), "missing '{expected}'");
        }
    }

    #[test]
    fn keyword_survives_normalization() {
        let registry = CollectionRegistry::builtin();
        let analyzer = Analyzer::new();
        let exclude = exclusion_terms(&registry);

        let keyword = normalize_keyword(&analyzer, "failed login events from apache", false, &exclude);
        assert_eq!(keyword.as_deref(), Some("fail login"));
    }

    #[test]
    fn all_noise_yields_absence() {
        let registry = CollectionRegistry::builtin();
        let analyzer = Analyzer::new();
        let exclude = exclusion_terms(&registry);

        assert_eq!(
            normalize_keyword(&analyzer, "show me the logs from apache", false, &exclude),
            None
        );
        assert_eq!(normalize_keyword(&analyzer, "", false, &exclude), None);
    }
}
