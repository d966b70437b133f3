//! Configuration management for `TourAI`
//!
//! Handles loading configuration from files and environment variables and
//! validates every setting before the collaborators are constructed. The
//! loaded value is read-only for the rest of the process.

use crate::TourAiError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure for `TourAI`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TourAiConfig {
    /// Geocoding service configuration
    pub geocoding: GeocodingConfig,
    /// Weather service configuration
    pub weather: WeatherConfig,
    /// Points-of-interest service configuration
    pub places: PlacesConfig,
    /// Settings shared by every outbound request
    pub http: HttpConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Web server configuration
    pub server: ServerConfig,
}

/// Geocoding (Nominatim) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Search endpoint
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_service_timeout")]
    pub timeout_seconds: u64,
}

/// Weather (Open-Meteo) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Forecast endpoint
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_service_timeout")]
    pub timeout_seconds: u64,
}

/// Points-of-interest (Overpass) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// Interpreter endpoint
    #[serde(default = "default_places_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_places_timeout")]
    pub timeout_seconds: u64,
    /// Search radius around the resolved coordinates, in meters
    #[serde(default = "default_search_radius")]
    pub search_radius_meters: u32,
    /// Server-side query timeout passed in the Overpass query header
    #[serde(default = "default_query_timeout")]
    pub query_timeout_seconds: u64,
}

/// Settings applied to every outbound request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Fixed delay before each call, in milliseconds
    #[serde(default = "default_request_delay")]
    pub request_delay_ms: u64,
    /// User-Agent header (Nominatim rejects anonymous clients)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Listen port
    #[serde(default = "default_server_port")]
    pub port: u16,
}

// Default value functions
fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_places_base_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

fn default_service_timeout() -> u64 {
    10
}

fn default_places_timeout() -> u64 {
    30
}

fn default_search_radius() -> u32 {
    20_000
}

fn default_query_timeout() -> u64 {
    25
}

fn default_request_delay() -> u64 {
    1000
}

fn default_user_agent() -> String {
    "TourismAgent/1.0 (+https://github.com/tourai/tourai)".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    5000
}

impl Default for TourAiConfig {
    fn default() -> Self {
        Self {
            geocoding: GeocodingConfig {
                base_url: default_geocoding_base_url(),
                timeout_seconds: default_service_timeout(),
            },
            weather: WeatherConfig {
                base_url: default_weather_base_url(),
                timeout_seconds: default_service_timeout(),
            },
            places: PlacesConfig {
                base_url: default_places_base_url(),
                timeout_seconds: default_places_timeout(),
                search_radius_meters: default_search_radius(),
                query_timeout_seconds: default_query_timeout(),
            },
            http: HttpConfig {
                request_delay_ms: default_request_delay(),
                user_agent: default_user_agent(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
            server: ServerConfig {
                host: default_server_host(),
                port: default_server_port(),
            },
        }
    }
}

impl HttpConfig {
    /// Delay applied before every outbound call
    #[must_use]
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl TourAiConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TOURAI_SERVER__PORT=8080 overrides server.port
        builder = builder.add_source(
            Environment::with_prefix("TOURAI")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TourAiConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tourai").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.geocoding.base_url.is_empty() {
            self.geocoding.base_url = default_geocoding_base_url();
        }
        if self.geocoding.timeout_seconds == 0 {
            self.geocoding.timeout_seconds = default_service_timeout();
        }
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_service_timeout();
        }
        if self.places.base_url.is_empty() {
            self.places.base_url = default_places_base_url();
        }
        if self.places.timeout_seconds == 0 {
            self.places.timeout_seconds = default_places_timeout();
        }
        if self.places.search_radius_meters == 0 {
            self.places.search_radius_meters = default_search_radius();
        }
        if self.places.query_timeout_seconds == 0 {
            self.places.query_timeout_seconds = default_query_timeout();
        }
        if self.http.user_agent.is_empty() {
            self.http.user_agent = default_user_agent();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        let timeouts = [
            ("Geocoding", self.geocoding.timeout_seconds),
            ("Weather", self.weather.timeout_seconds),
            ("Places", self.places.timeout_seconds),
        ];
        for (service, timeout) in timeouts {
            if timeout > 300 {
                return Err(TourAiError::config(format!(
                    "{service} API timeout cannot exceed 300 seconds"
                ))
                .into());
            }
        }

        if self.http.request_delay_ms > 60_000 {
            return Err(
                TourAiError::config("Request delay cannot exceed 60000 ms").into(),
            );
        }

        if self.places.search_radius_meters > 100_000 {
            return Err(TourAiError::config(
                "Search radius cannot exceed 100000 meters",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TourAiError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TourAiError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let urls = [
            ("Geocoding", &self.geocoding.base_url),
            ("Weather", &self.weather.base_url),
            ("Places", &self.places.base_url),
        ];
        for (service, url) in urls {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TourAiError::config(format!(
                    "{service} API base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TourAiConfig::default();
        assert_eq!(
            config.geocoding.base_url,
            "https://nominatim.openstreetmap.org/search"
        );
        assert_eq!(config.weather.timeout_seconds, 10);
        assert_eq!(config.places.timeout_seconds, 30);
        assert_eq!(config.places.search_radius_meters, 20_000);
        assert_eq!(config.http.request_delay(), Duration::from_secs(1));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.port, 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TourAiConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TourAiConfig::default();
        config.places.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Places API timeout cannot exceed")
        );
    }

    #[test]
    fn test_config_validation_rejects_non_http_url() {
        let mut config = TourAiConfig::default();
        config.weather.base_url = "ftp://example.org".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Weather API base URL"));
    }

    #[test]
    fn test_apply_defaults_repairs_zero_values() {
        let mut config = TourAiConfig::default();
        config.places.search_radius_meters = 0;
        config.server.port = 0;
        config.logging.format = String::new();
        config.apply_defaults();
        assert_eq!(config.places.search_radius_meters, 20_000);
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_partial_file() {
        let dir = std::env::temp_dir().join(format!("tourai-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[server]\nport = 8088\n\n[http]\nrequest_delay_ms = 0").unwrap();

        let config = TourAiConfig::load_from_path(Some(path)).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.http.request_delay_ms, 0);
        assert_eq!(config.weather.base_url, "https://api.open-meteo.com/v1/forecast");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_config_path_generation() {
        let path = TourAiConfig::get_config_path();
        if let Some(path) = path {
            assert!(path.to_string_lossy().contains("tourai"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
