//! Relative time-range extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// `last <count> <unit>` with minute/hour/day unit spellings.
static TIME_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\blast\s+(\d+)\s*(minutes?|mins?|hours?|hrs?|days?|d)\b")
        .unwrap_or_else(|_| unreachable!())
});

/// Extracts a lookback window in whole hours from a time phrase.
///
/// Only the first `last <count> <unit>` phrase in the text is honored.
/// Minutes round up to the nearest whole hour with a floor of one hour,
/// hours pass through, days multiply by 24. A count too large to represent,
/// like an unrecognized unit spelling, degrades to "no filter" rather than
/// failing the query.
#[must_use]
pub fn extract_lookback_hours(text: &str) -> Option<u64> {
    let caps = TIME_RANGE_RE.captures(text)?;
    let value: u64 = caps[1].parse().ok()?;
    let unit = caps[2].to_lowercase();

    if unit.starts_with("min") {
        Some(value.div_ceil(60).max(1))
    } else if unit.starts_with("hour") || unit.starts_with("hr") {
        Some(value)
    } else if unit.starts_with("day") || unit == "d" {
        Some(value.saturating_mul(24))
    } else {
        None
    }
}

/// Removes every time-range phrase span, replacing it with a space.
///
/// The keyword normalizer and the limit extractor both operate on text with
/// these spans removed.
#[must_use]
pub fn strip_time_phrases(text: &str) -> String {
    TIME_RANGE_RE.replace_all(text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_pass_through() {
        assert_eq!(extract_lookback_hours("last 24 hours"), Some(24));
        assert_eq!(extract_lookback_hours("last 1 hour"), Some(1));
        assert_eq!(extract_lookback_hours("last 36 hrs"), Some(36));
    }

    #[test]
    fn minutes_round_up_with_floor_of_one() {
        assert_eq!(extract_lookback_hours("last 15 minutes"), Some(1));
        assert_eq!(extract_lookback_hours("last 90 minutes"), Some(2));
        assert_eq!(extract_lookback_hours("last 60 mins"), Some(1));
        assert_eq!(extract_lookback_hours("last 61 minutes"), Some(2));
        assert_eq!(extract_lookback_hours("last 1 min"), Some(1));
    }

    #[test]
    fn days_multiply_by_24() {
        assert_eq!(extract_lookback_hours("last 7 days"), Some(168));
        assert_eq!(extract_lookback_hours("last 1 day"), Some(24));
        assert_eq!(extract_lookback_hours("last 2 d"), Some(48));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(extract_lookback_hours("LAST 24 HOURS"), Some(24));
    }

    #[test]
    fn only_first_match_is_honored() {
        assert_eq!(
            extract_lookback_hours("last 2 hours or last 7 days"),
            Some(2)
        );
    }

    #[test]
    fn absence_when_no_time_phrase() {
        assert_eq!(extract_lookback_hours("show me apache errors"), None);
        assert_eq!(extract_lookback_hours("last week"), None);
        assert_eq!(extract_lookback_hours(""), None);
    }

    #[test]
    fn count_without_unit_is_not_a_time_phrase() {
        // "last 20" alone is a limit phrase, not a time phrase.
        assert_eq!(extract_lookback_hours("last 20 logins"), None);
    }

    #[test]
    fn oversized_count_degrades_to_absence() {
        assert_eq!(
            extract_lookback_hours("last 99999999999999999999999 hours"),
            None
        );
    }

    #[test]
    fn strip_removes_every_occurrence() {
        let stripped = strip_time_phrases("errors last 24 hours and last 7 days too");
        assert!(!stripped.contains("24"));
        assert!(!stripped.contains("days"));
        assert!(stripped.contains("errors"));
        assert!(stripped.contains("too"));
    }

    #[test]
    fn strip_leaves_text_without_time_phrases_alone() {
        assert_eq!(strip_time_phrases("apache errors"), "apache errors");
    }
}
