//! Result-size limit extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default result-size bound when no limit phrase is present.
pub const DEFAULT_RESULT_LIMIT: u32 = 10;

/// Smallest accepted result-size bound.
pub const MIN_RESULT_LIMIT: u32 = 1;

/// Largest accepted result-size bound.
pub const MAX_RESULT_LIMIT: u32 = 1000;

/// `<keyword> <count>` result-size phrase.
///
/// "last" overlaps with the time-range pattern; callers resolve the
/// ambiguity by stripping time phrases before searching for a limit (see
/// the translator).
static LIMIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(top|limit|show|first|last)\s+(\d+)\b").unwrap_or_else(|_| unreachable!())
});

/// Extracts the result-size bound from the first limit phrase, clamped to
/// [1, 1000]. Returns the default (10) when no phrase is present.
///
/// Callers pass text with time-range phrases already removed so that
/// "last 7 days top 50" yields 50, never 7.
#[must_use]
pub fn extract_limit(text: &str) -> u32 {
    let Some(caps) = LIMIT_RE.captures(text) else {
        return DEFAULT_RESULT_LIMIT;
    };
    // A count too large to parse is certainly above the upper bound.
    let value = caps[2].parse::<u64>().unwrap_or(u64::from(MAX_RESULT_LIMIT));
    u32::try_from(value.clamp(
        u64::from(MIN_RESULT_LIMIT),
        u64::from(MAX_RESULT_LIMIT),
    ))
    .unwrap_or(MAX_RESULT_LIMIT)
}

/// Removes every limit phrase span, replacing it with a space.
#[must_use]
pub fn strip_limit_phrases(text: &str) -> String {
    LIMIT_RE.replace_all(text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_each_leading_keyword() {
        assert_eq!(extract_limit("top 20"), 20);
        assert_eq!(extract_limit("limit 5"), 5);
        assert_eq!(extract_limit("show 15"), 15);
        assert_eq!(extract_limit("first 3"), 3);
        assert_eq!(extract_limit("last 50"), 50);
    }

    #[test]
    fn default_when_absent() {
        assert_eq!(extract_limit("apache errors"), DEFAULT_RESULT_LIMIT);
        assert_eq!(extract_limit(""), DEFAULT_RESULT_LIMIT);
    }

    #[test]
    fn clamps_to_bounds() {
        assert_eq!(extract_limit("top 0"), 1);
        assert_eq!(extract_limit("top 5000"), 1000);
        assert_eq!(extract_limit("top 1000"), 1000);
        assert_eq!(extract_limit("top 99999999999999999999"), 1000);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(extract_limit("show 5 then top 50"), 5);
    }

    #[test]
    fn keyword_without_count_is_ignored() {
        assert_eq!(extract_limit("show me apache"), DEFAULT_RESULT_LIMIT);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(extract_limit("TOP 25"), 25);
    }

    #[test]
    fn strip_removes_every_occurrence() {
        let stripped = strip_limit_phrases("top 20 errors limit 5");
        assert!(!stripped.contains("20"));
        assert!(!stripped.contains('5'));
        assert!(stripped.contains("errors"));
    }
}
