//! Attractions module
//!
//! - Points-of-interest collaborator contract and its Overpass client
//! - Ranking of raw records into a short attraction list
//! - Static scoring and exclusion tables shared by both

pub mod overpass;
pub mod ranker;
pub mod tables;

pub use overpass::OverpassPoiFetcher;
pub use ranker::{AttractionRanker, ScoredAttraction};

use crate::Result;
use crate::models::{Coordinates, PoiRecord};

/// Default search radius around a resolved place.
pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 20_000;

/// Source of raw points of interest around a location
///
/// Errors are returned to the orchestrator, which turns them into an
/// apology sentence; they never abort a request.
pub trait PointsOfInterestFetcher: Send + Sync {
    fn fetch(&self, coordinates: Coordinates, radius_meters: u32) -> Result<Vec<PoiRecord>>;
}
