//! `TourAI` - travel question answering
//!
//! Answers free-text questions such as "What's the weather in Paris?" or
//! "Places to visit in Tokyo" by extracting the place, resolving it to
//! coordinates, fetching current weather and/or nearby attractions, and
//! composing one reply.

pub mod agent;
pub mod api;
pub mod attractions;
pub mod config;
pub mod error;
pub mod geocoding;
pub mod logging;
pub mod models;
pub mod nlu;
pub mod response;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use agent::{FetchPlan, TourismAgent};
pub use attractions::{AttractionRanker, PointsOfInterestFetcher};
pub use config::TourAiConfig;
pub use error::{ErrorCode, TourAiError};
pub use geocoding::Geocoder;
pub use models::{Coordinates, CurrentWeather, PlaceName, PoiRecord, Temperature};
pub use nlu::{Intent, IntentClassifier, PlaceExtractor};
pub use response::{PlacesOutcome, ResponseComposer, WeatherOutcome};
pub use weather::WeatherFetcher;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TourAiError>;
