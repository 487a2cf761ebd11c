//! Open-Meteo HTTP client
//!
//! Fetches the `/forecast` endpoint and converts the wire format into the
//! domain payload.

use chrono::NaiveDateTime;
use domain::{ForecastPayload, HourlySample, HourlySeries, Percentage};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiResponse, CurrentData, HourlyData};

/// Hourly/current variables requested from the provider
const WEATHER_VARIABLES: &str = "temperature_2m,wind_speed_10m,precipitation_probability,\
                                 relative_humidity_2m,weather_code";

/// Weather client errors
#[derive(Debug, Error)]
pub enum OpenMeteoError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Open-Meteo client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenMeteoConfig {
    /// API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days (1-16, default: 7)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// Timezone passed to the provider; hourly timestamps arrive in this
    /// zone (default: Asia/Yekaterinburg)
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_forecast_days() -> u8 {
    7
}

fn default_timezone() -> String {
    "Asia/Yekaterinburg".to_string()
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
            timezone: default_timezone(),
        }
    }
}

/// Open-Meteo HTTP client
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: OpenMeteoConfig,
}

impl OpenMeteoClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenMeteoConfig) -> Result<Self, OpenMeteoError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenMeteoError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, OpenMeteoError> {
        Self::new(OpenMeteoConfig::default())
    }

    /// Fetch the current observation and the hourly series for a location
    ///
    /// # Errors
    ///
    /// Returns an error for invalid coordinates, transport failures,
    /// non-success statuses or an unparseable response body.
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastPayload, OpenMeteoError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_forecast_url(latitude, longitude);
        debug!(url = %url, "Fetching forecast");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| OpenMeteoError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(OpenMeteoError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(OpenMeteoError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(OpenMeteoError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| OpenMeteoError::ParseError(e.to_string()))?;

        let current = api_response.current.ok_or_else(|| {
            OpenMeteoError::ParseError("No current block in response".to_string())
        })?;
        let hourly = api_response.hourly.ok_or_else(|| {
            OpenMeteoError::ParseError("No hourly block in response".to_string())
        })?;

        Ok(ForecastPayload {
            current: Self::parse_current(&current)?,
            hourly: Self::parse_hourly(&hourly)?,
        })
    }

    /// Check if the weather service is reachable
    pub async fn is_healthy(&self) -> bool {
        let location = domain::GeoLocation::yekaterinburg();
        self.fetch_forecast(location.latitude(), location.longitude())
            .await
            .is_ok()
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), OpenMeteoError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(OpenMeteoError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the API URL for a forecast request
    fn build_forecast_url(&self, latitude: f64, longitude: f64) -> String {
        let days = self.config.forecast_days.clamp(1, 16);
        format!(
            "{}/forecast?latitude={}&longitude={}&timezone={}&current={}&hourly={}&forecast_days={}",
            self.config.base_url,
            latitude,
            longitude,
            self.config.timezone,
            WEATHER_VARIABLES,
            WEATHER_VARIABLES,
            days
        )
    }

    /// Convert the current block to a domain sample
    fn parse_current(data: &CurrentData) -> Result<HourlySample, OpenMeteoError> {
        Self::build_sample(
            data.temperature_2m,
            data.precipitation_probability,
            data.relative_humidity_2m,
            data.wind_speed_10m,
            data.weather_code,
        )
    }

    /// Convert the parallel hourly arrays to a domain series
    fn parse_hourly(data: &HourlyData) -> Result<HourlySeries, OpenMeteoError> {
        let expected = data.time.len();
        if data.temperature_2m.len() != expected
            || data.precipitation_probability.len() != expected
            || data.relative_humidity_2m.len() != expected
            || data.wind_speed_10m.len() != expected
            || data.weather_code.len() != expected
        {
            return Err(OpenMeteoError::ParseError(format!(
                "hourly arrays are not parallel: {expected} timestamps"
            )));
        }

        let time = data
            .time
            .iter()
            .map(|s| Self::parse_datetime(s))
            .collect::<Result<Vec<_>, _>>()?;

        let mut samples = Vec::with_capacity(expected);
        for i in 0..expected {
            samples.push(Self::build_sample(
                data.temperature_2m[i],
                data.precipitation_probability[i],
                data.relative_humidity_2m[i],
                data.wind_speed_10m[i],
                data.weather_code[i],
            )?);
        }

        HourlySeries::new(time, samples)
            .map_err(|e| OpenMeteoError::ParseError(e.to_string()))
    }

    fn build_sample(
        temperature: f64,
        precipitation_probability: u8,
        relative_humidity: u8,
        wind_speed: f64,
        weather_code: u16,
    ) -> Result<HourlySample, OpenMeteoError> {
        let precipitation = Percentage::new(precipitation_probability)
            .map_err(|e| OpenMeteoError::ParseError(e.to_string()))?;
        let humidity = Percentage::new(relative_humidity)
            .map_err(|e| OpenMeteoError::ParseError(e.to_string()))?;
        Ok(HourlySample::new(
            temperature,
            precipitation,
            humidity,
            wind_speed,
            weather_code,
        ))
    }

    /// Parse a provider timestamp (local time, no offset)
    fn parse_datetime(s: &str) -> Result<NaiveDateTime, OpenMeteoError> {
        // ISO 8601 without seconds (2024-01-15T14:00), the provider default
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
            return Ok(dt);
        }

        // With seconds
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(dt);
        }

        Err(OpenMeteoError::ParseError(format!(
            "Invalid datetime format: {s}"
        )))
    }
}
