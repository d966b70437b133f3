//! Natural-language understanding for user queries
//!
//! - Place extraction: ordered pattern chain with a capitalized-word fallback
//! - Intent classification: keyword and phrase heuristics

pub mod intent;
pub mod place_extractor;

pub use intent::{Intent, IntentClassifier, mentions_trip_planning};
pub use place_extractor::{PlaceExtractor, title_case};
