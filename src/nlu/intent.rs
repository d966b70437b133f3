//! Intent classification
//!
//! Decides whether a query asks about the weather, about places to visit,
//! or both. Matching is substring-based on the lower-cased text and is
//! independent of the extracted place name.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Any of these anywhere in the text means weather was asked about.
pub const WEATHER_KEYWORDS: &[&str] = &[
    "temperature",
    "temp",
    "weather",
    "rain",
    "forecast",
    "hot",
    "cold",
    "warm",
    "cool",
    "humid",
    "precipitation",
    "climate",
    "sunny",
    "cloudy",
    "rainy",
];

/// Phrases that reliably ask for attractions.
pub const PLACES_PHRASES: &[&str] = &[
    "places to",
    "place to",
    "places i can",
    "places you can",
    "what places",
    "which places",
    "what are the places",
    "attractions",
    "tourist",
    "sightseeing",
    "sights",
    "where to go",
    "where to visit",
    "what to see",
    "what to visit",
    "things to do",
    "destinations",
    "can visit",
    "can go",
    "should visit",
    "should see",
    "places i can visit",
    "places can visit",
    "places can go",
];

/// Weaker single-word signals, ignored inside "going to ... <word>".
pub const PLACES_SINGLE_WORDS: &[&str] = &["visit", "see"];

/// Words that mark a general trip-planning query.
pub const TRIP_PLANNING_MARKERS: &[&str] = &["plan", "trip", "going to go to"];

static GOING_TO_WORD: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    PLACES_SINGLE_WORDS
        .iter()
        .map(|word| {
            let pattern = format!(r"going\s+to\s+[^,.!?]*\b{word}\b");
            (
                *word,
                Regex::new(&pattern).expect("going-to pattern is valid"),
            )
        })
        .collect()
});

/// What the user asked about
///
/// `both` is derived: it is set exactly when `weather` and `places` are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intent {
    weather: bool,
    places: bool,
    both: bool,
}

impl Intent {
    #[must_use]
    pub fn new(weather: bool, places: bool) -> Self {
        Self {
            weather,
            places,
            both: weather && places,
        }
    }

    #[must_use]
    pub fn weather(&self) -> bool {
        self.weather
    }

    #[must_use]
    pub fn places(&self) -> bool {
        self.places
    }

    #[must_use]
    pub fn both(&self) -> bool {
        self.both
    }

    /// No topic was recognised
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.weather || self.places || self.both)
    }
}

/// Keyword-based intent classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Classify `text` into weather / places / both
    #[must_use]
    pub fn classify(&self, text: &str) -> Intent {
        let lower = text.to_lowercase();

        let weather = contains_any(&lower, WEATHER_KEYWORDS);
        let mut places = contains_any(&lower, PLACES_PHRASES);

        if !places {
            places = GOING_TO_WORD
                .iter()
                .any(|(word, going_to)| lower.contains(word) && !going_to.is_match(&lower));
        }

        // "plan my trip" / "plan to visit" always wants attractions
        if lower.contains("plan") && (lower.contains("trip") || lower.contains("visit")) {
            places = true;
        }

        let intent = Intent::new(weather, places);
        debug!("Detected intent: {:?}", intent);
        intent
    }
}

/// True when the text reads like a general trip-planning request
#[must_use]
pub fn mentions_trip_planning(text: &str) -> bool {
    contains_any(&text.to_lowercase(), TRIP_PLANNING_MARKERS)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
