//! One hour of forecast data

use serde::{Deserialize, Serialize};

use crate::conditions::{self, ConditionEntry};
use crate::errors::DomainError;
use crate::value_objects::Percentage;

/// One hour of forecast metrics, immutable once constructed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    /// Temperature in Celsius
    temperature: f64,
    /// Precipitation probability (0-100)
    precipitation_probability: Percentage,
    /// Relative humidity (0-100)
    relative_humidity: Percentage,
    /// Wind speed in km/h
    wind_speed: f64,
    /// Provider weather code, key into the condition catalog
    weather_code: u16,
}

impl HourlySample {
    /// Create a sample from already-validated metrics
    #[must_use]
    pub const fn new(
        temperature: f64,
        precipitation_probability: Percentage,
        relative_humidity: Percentage,
        wind_speed: f64,
        weather_code: u16,
    ) -> Self {
        Self {
            temperature,
            precipitation_probability,
            relative_humidity,
            wind_speed,
            weather_code,
        }
    }

    /// Temperature in Celsius
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Precipitation probability
    #[must_use]
    pub const fn precipitation_probability(&self) -> Percentage {
        self.precipitation_probability
    }

    /// Relative humidity
    #[must_use]
    pub const fn relative_humidity(&self) -> Percentage {
        self.relative_humidity
    }

    /// Wind speed in km/h
    #[must_use]
    pub const fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    /// Provider weather code
    #[must_use]
    pub const fn weather_code(&self) -> u16 {
        self.weather_code
    }

    /// Resolve this sample's weather code against the condition catalog
    ///
    /// # Errors
    ///
    /// Returns `UnknownConditionCode` for a code outside the catalog.
    pub fn condition(&self) -> Result<ConditionEntry, DomainError> {
        conditions::resolve(self.weather_code)
    }
}
