//! Application configuration
//!
//! Loaded from an optional `config.toml` with `POGODA_*` environment
//! overrides. The panel serves a single fixed point; its coordinates
//! default to Yekaterinburg.

use domain::{GeoLocation, InvalidCoordinates};
use integration_openmeteo::OpenMeteoConfig;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// The fixed point the panel forecasts for
    #[serde(default)]
    pub location: LocationConfig,

    /// Open-Meteo client configuration
    #[serde(default)]
    pub weather: OpenMeteoConfig,
}

/// The forecast point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Latitude in degrees
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    /// Longitude in degrees
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

fn default_latitude() -> f64 {
    GeoLocation::yekaterinburg().latitude()
}

fn default_longitude() -> f64 {
    GeoLocation::yekaterinburg().longitude()
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

impl LocationConfig {
    /// Validate the configured coordinates
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` for out-of-range values.
    pub fn to_location(&self) -> Result<GeoLocation, InvalidCoordinates> {
        GeoLocation::new(self.latitude, self.longitude)
    }
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// # Errors
    ///
    /// Returns an error when a config source is present but malformed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., POGODA_LOCATION_LATITUDE)
            .add_source(
                config::Environment::with_prefix("POGODA")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
