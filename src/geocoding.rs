//! Place name resolution
//!
//! Resolves an extracted place name to coordinates using the first match of
//! the Nominatim search API. Transport and parse failures are logged and
//! reported as "not found".

use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::Result;
use crate::api::ApiClient;
use crate::config::TourAiConfig;
use crate::models::{Coordinates, PlaceName};

/// Resolves place names to coordinates
pub trait Geocoder: Send + Sync {
    /// First/best match for `place`, or `None` if it cannot be resolved
    fn resolve(&self, place: &PlaceName) -> Option<Coordinates>;
}

/// Single Nominatim search hit; coordinates arrive as strings
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Nominatim-backed geocoder
pub struct NominatimGeocoder {
    api: ApiClient,
    base_url: String,
}

impl NominatimGeocoder {
    /// Create a new geocoder from configuration
    pub fn new(config: &TourAiConfig) -> Result<Self> {
        let api = ApiClient::new("nominatim", &config.http, config.geocoding.timeout_seconds)?;
        Ok(Self {
            api,
            base_url: config.geocoding.base_url.clone(),
        })
    }

    fn search_url(&self, place: &PlaceName) -> String {
        format!(
            "{}?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(place.as_str())
        )
    }
}

impl Geocoder for NominatimGeocoder {
    #[instrument(skip(self), fields(place = %place))]
    fn resolve(&self, place: &PlaceName) -> Option<Coordinates> {
        debug!("Geocoding place name: {}", place);

        let results: Vec<NominatimPlace> = match self.api.get_json(&self.search_url(place)) {
            Ok(results) => results,
            Err(e) => {
                warn!("Geocoding failed for '{}': {}", place, e);
                return None;
            }
        };

        let coordinates = first_coordinates(results);
        match &coordinates {
            Some(coords) => info!("Found coordinates for {}: {}", place, coords.format_coordinates()),
            None => warn!("No coordinates found for {}", place),
        }
        coordinates
    }
}

/// Parse the first search hit into coordinates
fn first_coordinates(results: Vec<NominatimPlace>) -> Option<Coordinates> {
    let first = results.into_iter().next()?;

    match (first.lat.trim().parse::<f64>(), first.lon.trim().parse::<f64>()) {
        (Ok(lat), Ok(lon)) => {
            debug!(
                "Using match '{}'",
                first.display_name.as_deref().unwrap_or("<unnamed>")
            );
            Some(Coordinates::new(lat, lon))
        }
        _ => {
            warn!(
                "Unparseable coordinates in geocoding result: lat={}, lon={}",
                first.lat, first.lon
            );
            None
        }
    }
}
