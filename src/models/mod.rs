//! Data models for `TourAI`
//!
//! Every type here lives for a single request:
//! - Location: extracted place names and resolved coordinates
//! - Weather: current conditions as reported by the weather service
//! - Poi: raw tagged points of interest from the map service

pub mod location;
pub mod poi;
pub mod weather;

pub use location::{Coordinates, PlaceName};
pub use poi::PoiRecord;
pub use weather::{CurrentWeather, Temperature};
