//! Current weather model

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Current temperature exactly as the weather service reported it
///
/// The number keeps its original JSON representation, so `15` renders as
/// `15` and `15.0` as `15.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Temperature {
    Celsius(Number),
    Unavailable,
}

impl From<Option<Number>> for Temperature {
    fn from(value: Option<Number>) -> Self {
        value.map_or(Temperature::Unavailable, Temperature::Celsius)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temperature::Celsius(value) => write!(f, "{value}"),
            Temperature::Unavailable => f.write_str("N/A"),
        }
    }
}

/// Current conditions for a resolved place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Temperature in Celsius, or `N/A`
    pub temperature: Temperature,
    /// Probability of precipitation in percent; defaults to 0 when unreported
    pub precipitation_probability: Number,
}

impl CurrentWeather {
    #[must_use]
    pub fn new(temperature: Option<Number>, precipitation_probability: Option<Number>) -> Self {
        Self {
            temperature: temperature.into(),
            precipitation_probability: precipitation_probability.unwrap_or_else(|| Number::from(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_passes_number_through() {
        let integer: Number = serde_json::from_str("15").unwrap();
        let float: Number = serde_json::from_str("15.3").unwrap();
        assert_eq!(Temperature::Celsius(integer).to_string(), "15");
        assert_eq!(Temperature::Celsius(float).to_string(), "15.3");
    }

    #[test]
    fn test_missing_values() {
        let weather = CurrentWeather::new(None, None);
        assert_eq!(weather.temperature.to_string(), "N/A");
        assert_eq!(weather.precipitation_probability.to_string(), "0");
    }
}
