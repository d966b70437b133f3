//! Overpass API client for points of interest

use serde::Deserialize;
use tracing::{info, instrument};

use super::PointsOfInterestFetcher;
use super::tables::{LEISURE_PRIORITY, TOURISM_PRIORITY};
use crate::Result;
use crate::api::ApiClient;
use crate::config::TourAiConfig;
use crate::models::{Coordinates, PoiRecord};

/// Overpass interpreter response
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<PoiRecord>,
}

/// Fetches tourism, historic, and leisure features around a point
pub struct OverpassPoiFetcher {
    api: ApiClient,
    base_url: String,
    query_timeout_seconds: u64,
}

impl OverpassPoiFetcher {
    /// Create a new client from configuration
    pub fn new(config: &TourAiConfig) -> Result<Self> {
        let api = ApiClient::new("overpass", &config.http, config.places.timeout_seconds)?;
        Ok(Self {
            api,
            base_url: config.places.base_url.clone(),
            query_timeout_seconds: config.places.query_timeout_seconds,
        })
    }

    /// Overpass QL for every scored category within `radius_meters`
    #[must_use]
    pub fn build_query(&self, coordinates: Coordinates, radius_meters: u32) -> String {
        build_query(coordinates, radius_meters, self.query_timeout_seconds)
    }
}

impl PointsOfInterestFetcher for OverpassPoiFetcher {
    #[instrument(skip(self), fields(coords = %coordinates.format_coordinates()))]
    fn fetch(&self, coordinates: Coordinates, radius_meters: u32) -> Result<Vec<PoiRecord>> {
        let query = self.build_query(coordinates, radius_meters);
        let response: OverpassResponse =
            self.api.post_form_json(&self.base_url, &[("data", query.as_str())])?;

        info!(
            "Overpass returned {} elements within {}m",
            response.elements.len(),
            radius_meters
        );
        Ok(response.elements)
    }
}

fn build_query(coordinates: Coordinates, radius_meters: u32, timeout_seconds: u64) -> String {
    let around = format!(
        "(around:{},{},{})",
        radius_meters, coordinates.latitude, coordinates.longitude
    );
    let tourism = alternation(TOURISM_PRIORITY);
    let leisure = alternation(LEISURE_PRIORITY);

    let mut statements = Vec::new();
    for element in ["node", "way", "relation"] {
        statements.push(format!(r#"{element}["tourism"~"^({tourism})$"]{around};"#));
    }
    for element in ["node", "way", "relation"] {
        statements.push(format!(r#"{element}["historic"]{around};"#));
    }
    for element in ["node", "way"] {
        statements.push(format!(r#"{element}["leisure"~"^({leisure})$"]{around};"#));
    }

    format!(
        "[out:json][timeout:{timeout_seconds}];\n(\n  {}\n);\nout body;\n>;\nout skel qt;",
        statements.join("\n  ")
    )
}

fn alternation(table: &[(&str, u32)]) -> String {
    table
        .iter()
        .map(|(value, _)| *value)
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_covers_all_categories() {
        let query = build_query(Coordinates::new(35.6762, 139.6503), 20_000, 25);

        assert!(query.starts_with("[out:json][timeout:25];"));
        assert!(query.contains(
            r#"node["tourism"~"^(attraction|museum|monument|gallery|theme_park|zoo|aquarium|artwork|viewpoint|information)$"](around:20000,35.6762,139.6503);"#
        ));
        assert!(query.contains(r#"relation["historic"](around:20000,35.6762,139.6503);"#));
        assert!(query.contains(
            r#"way["leisure"~"^(park|nature_reserve|garden)$"](around:20000,35.6762,139.6503);"#
        ));
        assert!(!query.contains(r#"relation["leisure""#));
        assert!(query.ends_with("out body;\n>;\nout skel qt;"));
    }

    #[test]
    fn test_response_parsing_keeps_untagged_elements() {
        let body = r#"{
            "version": 0.6,
            "elements": [
                {"type": "node", "id": 1, "lat": 1.0, "lon": 2.0,
                 "tags": {"tourism": "museum", "name": "City Museum"}},
                {"type": "node", "id": 2, "lat": 1.0, "lon": 2.0}
            ]
        }"#;
        let response: OverpassResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.elements.len(), 2);
        assert_eq!(response.elements[0].tag("name"), Some("City Museum"));
        assert!(response.elements[1].tags.is_none());
    }

    #[test]
    fn test_client_creation() {
        let mut config = TourAiConfig::default();
        config.places.query_timeout_seconds = 40;
        let client = OverpassPoiFetcher::new(&config).unwrap();
        assert_eq!(client.base_url, "https://overpass-api.de/api/interpreter");
        assert!(
            client
                .build_query(Coordinates::new(0.0, 0.0), 500)
                .starts_with("[out:json][timeout:40];")
        );
    }
}
