//! Mock collaborators shared by the integration tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Number;
use tourai::{
    Coordinates, CurrentWeather, Geocoder, PlaceName, PointsOfInterestFetcher, PoiRecord,
    TourAiError, TourismAgent, WeatherFetcher,
};

/// Number of calls made to each collaborator
#[derive(Debug, Default)]
pub struct CallLog {
    pub geocode: AtomicUsize,
    pub weather: AtomicUsize,
    pub places: AtomicUsize,
}

impl CallLog {
    pub fn geocode_calls(&self) -> usize {
        self.geocode.load(Ordering::SeqCst)
    }

    pub fn weather_calls(&self) -> usize {
        self.weather.load(Ordering::SeqCst)
    }

    pub fn places_calls(&self) -> usize {
        self.places.load(Ordering::SeqCst)
    }
}

/// Resolves every place except the unknown ones, all to the same point
pub struct MockGeocoder {
    unknown: HashSet<String>,
    calls: Arc<CallLog>,
}

impl Geocoder for MockGeocoder {
    fn resolve(&self, place: &PlaceName) -> Option<Coordinates> {
        self.calls.geocode.fetch_add(1, Ordering::SeqCst);
        (!self.unknown.contains(place.as_str())).then(|| Coordinates::new(48.8566, 2.3522))
    }
}

pub struct MockWeather {
    weather: Option<CurrentWeather>,
    calls: Arc<CallLog>,
}

impl WeatherFetcher for MockWeather {
    fn fetch(&self, _coordinates: Coordinates) -> Option<CurrentWeather> {
        self.calls.weather.fetch_add(1, Ordering::SeqCst);
        self.weather.clone()
    }
}

pub struct MockPlaces {
    result: Result<Vec<PoiRecord>, String>,
    calls: Arc<CallLog>,
}

impl PointsOfInterestFetcher for MockPlaces {
    fn fetch(&self, _coordinates: Coordinates, _radius_meters: u32) -> tourai::Result<Vec<PoiRecord>> {
        self.calls.places.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(TourAiError::api)
    }
}

/// Builder for an agent over mock collaborators
pub struct MockServices {
    unknown: HashSet<String>,
    weather: Option<CurrentWeather>,
    places: Result<Vec<PoiRecord>, String>,
}

impl Default for MockServices {
    fn default() -> Self {
        Self {
            unknown: HashSet::from(["Atlantis".to_string()]),
            weather: Some(weather(15, 20)),
            places: Ok(sample_records()),
        }
    }
}

impl MockServices {
    pub fn weather(mut self, weather: Option<CurrentWeather>) -> Self {
        self.weather = weather;
        self
    }

    pub fn places(mut self, places: Result<Vec<PoiRecord>, String>) -> Self {
        self.places = places;
        self
    }

    pub fn build(self) -> (TourismAgent, Arc<CallLog>) {
        let calls = Arc::new(CallLog::default());
        let agent = TourismAgent::new(
            Box::new(MockGeocoder {
                unknown: self.unknown,
                calls: Arc::clone(&calls),
            }),
            Box::new(MockWeather {
                weather: self.weather,
                calls: Arc::clone(&calls),
            }),
            Box::new(MockPlaces {
                result: self.places,
                calls: Arc::clone(&calls),
            }),
        );
        (agent, calls)
    }
}

pub fn weather(temperature: i64, precipitation: i64) -> CurrentWeather {
    CurrentWeather::new(Some(Number::from(temperature)), Some(Number::from(precipitation)))
}

pub fn poi(tags: &[(&str, &str)]) -> PoiRecord {
    PoiRecord::with_tags(tags.iter().copied())
}

/// Three well-formed attractions in descending score order
pub fn sample_records() -> Vec<PoiRecord> {
    vec![
        poi(&[("tourism", "attraction"), ("name", "Senso-ji Temple"), ("wikipedia", "en:Sensō-ji")]),
        poi(&[("tourism", "museum"), ("name", "Tokyo National Museum")]),
        poi(&[("leisure", "park"), ("name", "Ueno Park")]),
    ]
}
