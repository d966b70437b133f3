//! Reply composition
//!
//! Turns the weather and attraction results for a resolved place into the
//! single reply string returned to the user.

use crate::models::{CurrentWeather, PlaceName};

/// Reply when no place name could be extracted from the query.
pub const GUIDANCE_REPLY: &str = "I couldn't determine which place you're interested in. \
     Please specify a location like 'Paris' or 'What to see in London?'";

/// Reply when the extracted place could not be geocoded.
pub const NOT_FOUND_REPLY: &str = "It doesn't know this place exist.";

/// Header introducing the attraction list in a combined reply.
pub const COMBINED_PLACES_HEADER: &str = "And these are the places you can go:";

/// Result of the weather lookup
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherOutcome {
    Report(CurrentWeather),
    Unavailable,
}

impl From<Option<CurrentWeather>> for WeatherOutcome {
    fn from(weather: Option<CurrentWeather>) -> Self {
        weather.map_or(WeatherOutcome::Unavailable, WeatherOutcome::Report)
    }
}

/// Result of the attraction lookup
#[derive(Debug, Clone, PartialEq)]
pub enum PlacesOutcome {
    /// Ranked attraction names, best first; may be empty
    Ranked(Vec<String>),
    /// The points-of-interest service failed with this message
    Failed(String),
}

/// Renders reply sentences
#[derive(Debug, Clone, Copy)]
pub struct ResponseComposer {
    max_places: usize,
}

impl Default for ResponseComposer {
    fn default() -> Self {
        Self { max_places: 5 }
    }
}

impl ResponseComposer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-topic weather sentence
    #[must_use]
    pub fn weather_sentence(&self, place: &PlaceName, outcome: &WeatherOutcome) -> String {
        match outcome {
            WeatherOutcome::Report(weather) => format!(
                "In {place} it's currently {}°C with a chance of {}% to rain.",
                weather.temperature, weather.precipitation_probability
            ),
            WeatherOutcome::Unavailable => format!("Unable to fetch weather data for {place}."),
        }
    }

    /// Single-topic places sentence
    #[must_use]
    pub fn places_sentence(&self, place: &PlaceName, outcome: &PlacesOutcome) -> String {
        match outcome {
            PlacesOutcome::Ranked(names) if names.is_empty() => {
                format!("No tourist attractions found for {place}.")
            }
            PlacesOutcome::Ranked(names) => {
                let listed: Vec<&str> = names
                    .iter()
                    .take(self.max_places)
                    .map(String::as_str)
                    .collect();
                format!(
                    "In {place} these are the places you can go,\n\n{}",
                    listed.join("\n\n")
                )
            }
            PlacesOutcome::Failed(error) => format!("Error fetching places data: {error}"),
        }
    }

    /// Final reply from whichever results were produced
    ///
    /// With both results the weather sentence comes first, followed by a
    /// bulleted attraction list. A failed or empty places result is appended
    /// as its single-topic sentence instead.
    #[must_use]
    pub fn compose(
        &self,
        place: &PlaceName,
        weather: Option<&WeatherOutcome>,
        places: Option<&PlacesOutcome>,
    ) -> String {
        match (weather, places) {
            (Some(weather), Some(places)) => {
                let weather_text = self.weather_sentence(place, weather);
                match places {
                    PlacesOutcome::Ranked(names) if !names.is_empty() => {
                        format!("{weather_text} {}", self.bulleted(names))
                    }
                    _ => format!("{weather_text} {}", self.places_sentence(place, places)),
                }
            }
            (Some(weather), None) => self.weather_sentence(place, weather),
            (None, Some(places)) => self.places_sentence(place, places),
            (None, None) => NOT_FOUND_REPLY.to_string(),
        }
    }

    fn bulleted(&self, names: &[String]) -> String {
        let mut text = COMBINED_PLACES_HEADER.to_string();
        for name in names.iter().take(self.max_places) {
            text.push_str("\n• ");
            text.push_str(name);
        }
        text
    }
}
