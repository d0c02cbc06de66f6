//! Stopword classification for English query text.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// English words carrying no search intent on their own.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Articles and demonstratives
        "a", "an", "the", "this", "that", "these", "those",
        // Prepositions
        "at", "in", "on", "to", "for", "of", "from", "by", "with", "about",
        "into", "through", "during", "before", "after", "above", "below",
        "between", "under", "over",
        // Conjunctions
        "and", "or", "but", "nor", "so", "yet", "both", "either", "neither",
        "as", "if", "then", "than", "because", "although", "though", "unless",
        "until", "while", "whereas", "whether", "since",
        // Pronouns
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
        "them", "my", "your", "his", "its", "our", "their", "who", "whom",
        "whose", "which", "what",
        // Question words
        "how", "when", "where", "why",
        // Auxiliaries and negation
        "is", "am", "are", "was", "were", "be", "been", "being", "do", "does",
        "did", "have", "has", "had", "will", "would", "can", "could", "should",
        "may", "might", "must", "shall", "not", "no",
        // Quantifiers and filler
        "just", "only", "even", "also", "too", "very", "really", "quite",
        "some", "any", "each", "every", "many", "much", "more", "most", "few",
        "other", "another", "such", "same", "please",
    ]
    .into_iter()
    .collect()
});

/// Whether the given lowercase word is an English stopword.
#[must_use]
pub fn is_stopword(word: &str) -> bool {
    STOP_WORDS.contains(word)
}
