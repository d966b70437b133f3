//! Place name extraction
//!
//! Pulls a candidate destination out of free text. Patterns are tried in
//! order, most specific first, and the first one that yields a usable name
//! wins. When none does, the longest capitalized word in the text is used.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::PlaceName;

/// Words removed from free-form captures ("going to Paris and Rome" style).
const STOP_WORDS_PATTERN: &str = r"(?i)\b(?:going|to|visit|travel|trip|plan|what|where|how|is|are|the|there|and|can|i|my|me|let's|lets)\b";

/// Place names rarely run longer than "Rio De Janeiro".
const MAX_PLACE_WORDS: usize = 3;

static STOP_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STOP_WORDS_PATTERN).expect("stop word pattern is valid"));

/// How a strategy's capture is cleaned before use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleanup {
    /// Free-form capture: drop stop words first
    StripStopWords,
    /// Capitalized capture: keep as matched
    Verbatim,
}

/// One pattern in the extraction chain
#[derive(Debug)]
pub struct ExtractionStrategy {
    pub name: &'static str,
    pattern: Regex,
    pub cleanup: Cleanup,
}

impl ExtractionStrategy {
    fn new(name: &'static str, pattern: &str, cleanup: Cleanup) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("place pattern is valid"),
            cleanup,
        }
    }

    /// Run this strategy against `text`, returning a cleaned place name
    fn apply(&self, text: &str) -> Option<String> {
        let captured = self.pattern.captures(text)?.get(1)?.as_str().trim();

        let cleaned = match self.cleanup {
            Cleanup::StripStopWords => STOP_WORDS.replace_all(captured, "").trim().to_string(),
            Cleanup::Verbatim => captured.to_string(),
        };

        let cleaned = match cleaned.find([',', '.', '!', '?']) {
            Some(idx) => cleaned[..idx].trim(),
            None => cleaned.as_str(),
        };

        let place = cleaned
            .split_whitespace()
            .take(MAX_PLACE_WORDS)
            .collect::<Vec<_>>()
            .join(" ");

        (place.chars().count() > 1).then(|| title_case(&place))
    }
}

// Keywords match in any case; the capitalized variants still require the
// captured words themselves to start with an uppercase letter.
static STRATEGIES: LazyLock<Vec<ExtractionStrategy>> = LazyLock::new(|| {
    const FREE_FORM: &str = r"\s+([^,.!?]+)";
    const CAPITALIZED: &str = r"\s+([A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+)*)";

    vec![
        ExtractionStrategy::new(
            "going to go to",
            &format!("(?i:going to go to){FREE_FORM}"),
            Cleanup::StripStopWords,
        ),
        ExtractionStrategy::new(
            "going to",
            &format!("(?i:going to){FREE_FORM}"),
            Cleanup::StripStopWords,
        ),
        ExtractionStrategy::new(
            "go to",
            &format!("(?i:go to){FREE_FORM}"),
            Cleanup::StripStopWords,
        ),
        ExtractionStrategy::new("in", &format!("(?i:in){CAPITALIZED}"), Cleanup::Verbatim),
        ExtractionStrategy::new(
            "visit",
            &format!("(?i:visit){FREE_FORM}"),
            Cleanup::StripStopWords,
        ),
        ExtractionStrategy::new("to", &format!("(?i:to){CAPITALIZED}"), Cleanup::Verbatim),
        ExtractionStrategy::new("at", &format!("(?i:at){CAPITALIZED}"), Cleanup::Verbatim),
    ]
});

/// Extracts a place name from a user query
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceExtractor;

impl PlaceExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The ordered strategy chain
    #[must_use]
    pub fn strategies(&self) -> &'static [ExtractionStrategy] {
        &STRATEGIES
    }

    /// Extract a place name, or `None` when the text names no place
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<PlaceName> {
        for strategy in self.strategies() {
            if let Some(place) = strategy.apply(text) {
                debug!("Place '{}' extracted by pattern '{}'", place, strategy.name);
                return Some(PlaceName::new(place));
            }
        }

        let fallback = longest_capitalized_word(text);
        match &fallback {
            Some(place) => debug!("Place '{}' taken from capitalized words", place),
            None => debug!("No place found in '{}'", text),
        }
        fallback.map(PlaceName::new)
    }
}

/// Longest token starting with an uppercase letter, ties going to the first.
fn longest_capitalized_word(text: &str) -> Option<String> {
    let mut best: Option<(usize, String)> = None;

    for word in text.split_whitespace() {
        let clean: String = word
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        let len = clean.chars().count();
        let capitalized = clean.chars().next().is_some_and(char::is_uppercase);

        if capitalized && len > 2 && best.as_ref().is_none_or(|(best_len, _)| len > *best_len) {
            best = Some((len, clean));
        }
    }

    best.map(|(_, word)| title_case(&word))
}

/// Uppercase the first letter of every word and lowercase the rest.
///
/// A "word" starts after any non-letter, so `o'neil` becomes `O'Neil`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if previous_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn extract(text: &str) -> Option<String> {
        PlaceExtractor::new()
            .extract(text)
            .map(|p| p.as_str().to_string())
    }

    #[rstest]
    #[case("What's the weather in Paris?", "Paris")]
    #[case("Places to visit in Tokyo", "Tokyo")]
    #[case("I'm going to Bangalore, what's the temperature?", "Bangalore")]
    #[case("I'm going to go to Bangalore, let's plan my trip", "Bangalore")]
    #[case("Sightseeing in New York", "New York")]
    #[case("weather in Rio De Janeiro Brazil", "Rio De Janeiro")]
    #[case("Let me go to the beach", "Beach")]
    #[case("I want to visit kyoto", "Kyoto")]
    #[case("Flying to Lisbon tomorrow", "Lisbon")]
    #[case("Meet me at Heathrow", "Heathrow")]
    fn test_pattern_extraction(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(extract(text).as_deref(), Some(expected));
    }

    #[test]
    fn test_going_to_go_to_keeps_three_words() {
        assert_eq!(
            extract("We are going to go to san francisco bay area soon").as_deref(),
            Some("San Francisco Bay")
        );
    }

    #[test]
    fn test_stop_words_are_removed_from_free_form_capture() {
        assert_eq!(
            extract("going to the Louvre and Orsay").as_deref(),
            Some("Louvre Orsay")
        );
    }

    #[test]
    fn test_capitalized_patterns_keep_stop_words() {
        // "The" survives because the "in" pattern does not strip stop words.
        assert_eq!(extract("Weather in The Hague").as_deref(), Some("The Hague"));
    }

    #[test]
    fn test_capitalized_patterns_ignore_lowercase_words() {
        // "in paris" is not capitalized, so the fallback picks "Weather".
        assert_eq!(extract("Weather in paris").as_deref(), Some("Weather"));
    }

    #[test]
    fn test_empty_capture_falls_through_to_next_pattern() {
        // "going to" captures only "the"; the "in" pattern then fires.
        assert_eq!(
            extract("are we going to the, weather in Berlin").as_deref(),
            Some("Berlin")
        );
    }

    #[test]
    fn test_fallback_picks_longest_capitalized_word() {
        assert_eq!(extract("Tell me about Barcelona").as_deref(), Some("Barcelona"));
        assert_eq!(extract("Tell me about York").as_deref(), Some("Tell"));
    }

    #[test]
    fn test_fallback_strips_punctuation() {
        assert_eq!(extract("Thoughts on Madrid!?").as_deref(), Some("Thoughts"));
        assert_eq!(extract("hello Oslo!!").as_deref(), Some("Oslo"));
    }

    #[rstest]
    #[case("hello")]
    #[case("")]
    #[case("what about it?")]
    #[case("Hi")]
    fn test_no_place(#[case] text: &str) {
        assert_eq!(extract(text), None);
    }

    #[test]
    fn test_strategy_order() {
        let names: Vec<_> = PlaceExtractor::new()
            .strategies()
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(
            names,
            ["going to go to", "going to", "go to", "in", "visit", "to", "at"]
        );
    }

    #[rstest]
    #[case("new york", "New York")]
    #[case("SAN FRANCISCO", "San Francisco")]
    #[case("o'neil", "O'Neil")]
    #[case("st.petersburg", "St.Petersburg")]
    fn test_title_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(title_case(input), expected);
    }
}
