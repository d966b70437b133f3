//! Static lookup tables for attraction scoring and filtering
//!
//! The tourism and leisure tables double as the category filter of the
//! points-of-interest query, so a category is scored exactly when it is
//! fetched.

/// Base score per `tourism=*` value, in query order.
pub const TOURISM_PRIORITY: &[(&str, u32)] = &[
    ("attraction", 10),
    ("museum", 9),
    ("monument", 9),
    ("gallery", 8),
    ("theme_park", 8),
    ("zoo", 8),
    ("aquarium", 8),
    ("artwork", 7),
    ("viewpoint", 7),
    ("information", 6),
];

/// Base score per `leisure=*` value, used when no tourism value matched.
pub const LEISURE_PRIORITY: &[(&str, u32)] = &[("park", 7), ("nature_reserve", 7), ("garden", 6)];

/// Base score for any record carrying a `historic` tag.
pub const HISTORIC_SCORE: u32 = 9;

/// Base score when no category table matched.
pub const DEFAULT_SCORE: u32 = 3;

/// Bonus for records linked to Wikidata or Wikipedia.
pub const WIKI_BONUS: u32 = 2;

/// Bonus for records with an explicit `name:en` tag.
pub const ENGLISH_NAME_BONUS: u32 = 1;

/// English-name tags tried after `name:en`, in order.
pub const ENGLISH_NAME_TAGS: &[&str] = &["name:en:official", "name:en:short", "official_name:en"];

/// Names containing any of these (lower-cased) are not attractions.
pub const EXCLUDED_NAME_WORDS: &[&str] = &[
    "residency",
    "hotel",
    "hostel",
    "restaurant",
    "cafe",
    "bank",
    "atm",
    "parking",
    "toilet",
    "bench",
    "waste",
    "cross",
    "junction",
    "signal",
    "traffic",
    "bus stop",
    "metro",
    "station",
    "mall",
    "shop",
    "store",
    "market",
    "commercial",
    "office",
    "building",
    "apartment",
    "residential",
    "house",
    "home",
    "holiday home",
];

/// The narrower list applied when topping up a short result.
pub const FALLBACK_EXCLUDED_NAME_WORDS: &[&str] = &["residency", "holiday home", "bank", "cross"];

/// Longest accepted attraction name, in characters.
pub const MAX_NAME_CHARS: usize = 50;

/// Minimum share of ASCII among printable characters for a `name` to count as English.
pub const MIN_ASCII_RATIO: f64 = 0.7;

#[must_use]
pub fn tourism_priority(value: &str) -> Option<u32> {
    lookup(TOURISM_PRIORITY, value)
}

#[must_use]
pub fn leisure_priority(value: &str) -> Option<u32> {
    lookup(LEISURE_PRIORITY, value)
}

fn lookup(table: &[(&str, u32)], value: &str) -> Option<u32> {
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, score)| *score)
}
