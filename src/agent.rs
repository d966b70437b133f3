//! Request orchestration
//!
//! [`TourismAgent::process_request`] is the single entry point: it extracts
//! the place, resolves it, decides what to fetch, and composes the reply.
//! Every failure path ends in a reply string.

use tracing::{debug, info, instrument, warn};

use crate::Result;
use crate::attractions::{
    AttractionRanker, DEFAULT_SEARCH_RADIUS_METERS, OverpassPoiFetcher, PointsOfInterestFetcher,
};
use crate::config::TourAiConfig;
use crate::geocoding::{Geocoder, NominatimGeocoder};
use crate::models::{Coordinates, PlaceName};
use crate::nlu::{Intent, IntentClassifier, PlaceExtractor, mentions_trip_planning};
use crate::response::{GUIDANCE_REPLY, NOT_FOUND_REPLY, PlacesOutcome, ResponseComposer, WeatherOutcome};
use crate::weather::{OpenMeteoWeather, WeatherFetcher};

/// Which collaborators a request needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPlan {
    WeatherOnly,
    PlacesOnly,
    Both,
}

impl FetchPlan {
    /// Plan for a classified query; `text` is only consulted when the intent is empty
    #[must_use]
    pub fn decide(intent: Intent, text: &str) -> Self {
        match (intent.weather() || intent.both(), intent.places() || intent.both()) {
            (true, true) => FetchPlan::Both,
            (true, false) => FetchPlan::WeatherOnly,
            (false, true) => FetchPlan::PlacesOnly,
            (false, false) if mentions_trip_planning(text) => FetchPlan::PlacesOnly,
            (false, false) => FetchPlan::Both,
        }
    }

    #[must_use]
    pub fn wants_weather(self) -> bool {
        matches!(self, FetchPlan::WeatherOnly | FetchPlan::Both)
    }

    #[must_use]
    pub fn wants_places(self) -> bool {
        matches!(self, FetchPlan::PlacesOnly | FetchPlan::Both)
    }
}

/// Travel question answering agent
///
/// Holds no per-request state, so one instance can serve concurrent callers.
pub struct TourismAgent {
    extractor: PlaceExtractor,
    classifier: IntentClassifier,
    ranker: AttractionRanker,
    composer: ResponseComposer,
    geocoder: Box<dyn Geocoder>,
    weather: Box<dyn WeatherFetcher>,
    places: Box<dyn PointsOfInterestFetcher>,
    search_radius_meters: u32,
}

impl TourismAgent {
    /// Create an agent over the given collaborators
    pub fn new(
        geocoder: Box<dyn Geocoder>,
        weather: Box<dyn WeatherFetcher>,
        places: Box<dyn PointsOfInterestFetcher>,
    ) -> Self {
        Self {
            extractor: PlaceExtractor::new(),
            classifier: IntentClassifier::new(),
            ranker: AttractionRanker::new(),
            composer: ResponseComposer::new(),
            geocoder,
            weather,
            places,
            search_radius_meters: DEFAULT_SEARCH_RADIUS_METERS,
        }
    }

    #[must_use]
    pub fn with_search_radius(mut self, radius_meters: u32) -> Self {
        self.search_radius_meters = radius_meters;
        self
    }

    /// Agent backed by the Nominatim, Open-Meteo, and Overpass services
    pub fn from_config(config: &TourAiConfig) -> Result<Self> {
        let agent = Self::new(
            Box::new(NominatimGeocoder::new(config)?),
            Box::new(OpenMeteoWeather::new(config)?),
            Box::new(OverpassPoiFetcher::new(config)?),
        )
        .with_search_radius(config.places.search_radius_meters);
        Ok(agent)
    }

    #[must_use]
    pub fn search_radius_meters(&self) -> u32 {
        self.search_radius_meters
    }

    /// Answer one free-text travel question
    #[instrument(skip(self))]
    pub fn process_request(&self, text: &str) -> String {
        let Some(place) = self.extractor.extract(text) else {
            info!("No place found in query");
            return GUIDANCE_REPLY.to_string();
        };
        info!("Extracted place: {}", place);

        let Some(coordinates) = self.geocoder.resolve(&place) else {
            info!("Could not resolve {}", place);
            return NOT_FOUND_REPLY.to_string();
        };

        let intent = self.classifier.classify(text);
        let plan = FetchPlan::decide(intent, text);
        debug!("Fetch plan for {}: {:?}", place, plan);

        let weather = plan
            .wants_weather()
            .then(|| WeatherOutcome::from(self.weather.fetch(coordinates)));
        let places = plan
            .wants_places()
            .then(|| self.fetch_places(&place, coordinates));

        self.composer
            .compose(&place, weather.as_ref(), places.as_ref())
    }

    fn fetch_places(&self, place: &PlaceName, coordinates: Coordinates) -> PlacesOutcome {
        match self.places.fetch(coordinates, self.search_radius_meters) {
            Ok(records) => {
                let ranked = self.ranker.rank(&records);
                info!(
                    "Ranked {} attractions for {} from {} records",
                    ranked.len(),
                    place,
                    records.len()
                );
                PlacesOutcome::Ranked(ranked)
            }
            Err(e) => {
                warn!("Places lookup failed for {}: {}", place, e);
                PlacesOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Intent::new(true, false), "", FetchPlan::WeatherOnly)]
    #[case(Intent::new(false, true), "", FetchPlan::PlacesOnly)]
    #[case(Intent::new(true, true), "", FetchPlan::Both)]
    #[case(Intent::default(), "Tell me about New York", FetchPlan::Both)]
    #[case(Intent::default(), "help me plan something in Rome", FetchPlan::PlacesOnly)]
    #[case(Intent::default(), "a trip around Lisbon", FetchPlan::PlacesOnly)]
    #[case(Intent::default(), "we are going to go to Oslo", FetchPlan::PlacesOnly)]
    fn test_fetch_plan(#[case] intent: Intent, #[case] text: &str, #[case] expected: FetchPlan) {
        assert_eq!(FetchPlan::decide(intent, text), expected);
    }

    #[test]
    fn test_fetch_plan_flags() {
        assert!(FetchPlan::Both.wants_weather() && FetchPlan::Both.wants_places());
        assert!(!FetchPlan::WeatherOnly.wants_places());
        assert!(!FetchPlan::PlacesOnly.wants_weather());
    }

    #[test]
    fn test_from_config_uses_configured_radius() {
        let mut config = TourAiConfig::default();
        config.places.search_radius_meters = 5_000;
        let agent = TourismAgent::from_config(&config).unwrap();
        assert_eq!(agent.search_radius_meters(), 5_000);
    }
}
