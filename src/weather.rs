//! Current weather lookup via the Open-Meteo forecast API

use serde::Deserialize;
use serde_json::Number;
use tracing::{info, instrument, warn};

use crate::Result;
use crate::api::ApiClient;
use crate::config::TourAiConfig;
use crate::models::{Coordinates, CurrentWeather};

/// Fields requested from the `current` block.
const CURRENT_FIELDS: &str = "temperature_2m,precipitation_probability,weather_code";

/// Source of current weather conditions
pub trait WeatherFetcher: Send + Sync {
    /// Current conditions at `coordinates`, or `None` if the service failed
    fn fetch(&self, coordinates: Coordinates) -> Option<CurrentWeather>;
}

/// `OpenMeteo` API response structures
mod openmeteo {
    use super::{CurrentWeather, Deserialize, Number};

    /// Forecast response; only the `current` block is used
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        #[serde(default)]
        pub current: Option<CurrentData>,
    }

    /// Current conditions; numbers are kept exactly as sent
    #[derive(Debug, Default, Deserialize)]
    pub struct CurrentData {
        #[serde(rename = "temperature_2m", default)]
        pub temperature: Option<Number>,
        #[serde(default)]
        pub precipitation_probability: Option<Number>,
    }

    impl ForecastResponse {
        #[must_use]
        pub fn into_current_weather(self) -> CurrentWeather {
            let current = self.current.unwrap_or_default();
            CurrentWeather::new(current.temperature, current.precipitation_probability)
        }
    }
}

/// Open-Meteo weather client
pub struct OpenMeteoWeather {
    api: ApiClient,
    base_url: String,
}

impl OpenMeteoWeather {
    /// Create a new weather client from configuration
    pub fn new(config: &TourAiConfig) -> Result<Self> {
        let api = ApiClient::new("open-meteo", &config.http, config.weather.timeout_seconds)?;
        Ok(Self {
            api,
            base_url: config.weather.base_url.clone(),
        })
    }

    fn current_url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}?latitude={}&longitude={}&current={}&timezone=auto",
            self.base_url, coordinates.latitude, coordinates.longitude, CURRENT_FIELDS
        )
    }
}

impl WeatherFetcher for OpenMeteoWeather {
    #[instrument(skip(self), fields(coords = %coordinates.format_coordinates()))]
    fn fetch(&self, coordinates: Coordinates) -> Option<CurrentWeather> {
        match self
            .api
            .get_json::<openmeteo::ForecastResponse>(&self.current_url(coordinates))
        {
            Ok(response) => {
                let weather = response.into_current_weather();
                info!(
                    "Current weather: {}°C, {}% precipitation",
                    weather.temperature, weather.precipitation_probability
                );
                Some(weather)
            }
            Err(e) => {
                warn!("Weather lookup failed: {}", e);
                None
            }
        }
    }
}
