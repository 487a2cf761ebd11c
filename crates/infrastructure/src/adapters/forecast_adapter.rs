//! Forecast adapter - implements ForecastPort using integration_openmeteo

use application::error::ApplicationError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use domain::{ForecastPayload, GeoLocation};
use integration_openmeteo::{OpenMeteoClient, OpenMeteoConfig, OpenMeteoError};
use tracing::{debug, instrument};

/// Adapter fetching forecast payloads from Open-Meteo
pub struct ForecastAdapter {
    client: OpenMeteoClient,
}

impl std::fmt::Debug for ForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastAdapter")
            .field("client", &"OpenMeteoClient")
            .finish()
    }
}

impl ForecastAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: OpenMeteoConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration error to application error
    fn map_error(err: OpenMeteoError) -> ApplicationError {
        match err {
            OpenMeteoError::ConnectionFailed(e) | OpenMeteoError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            OpenMeteoError::ParseError(e) | OpenMeteoError::ServiceUnavailable(e) => {
                ApplicationError::Internal(e)
            },
            OpenMeteoError::InvalidCoordinates => {
                ApplicationError::Configuration("Invalid coordinates".into())
            },
            OpenMeteoError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<ForecastPayload, ApplicationError> {
        let result = self
            .client
            .fetch_forecast(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(payload) => {
                debug!(
                    hourly_entries = payload.hourly.len(),
                    current_code = payload.current.weather_code(),
                    "Retrieved forecast payload"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to fetch forecast payload");
            },
        }

        result
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_adapter() {
        assert!(ForecastAdapter::new().is_ok());
    }

    #[test]
    fn debug_impl() {
        let adapter = ForecastAdapter::new().expect("adapter");
        let debug_str = format!("{adapter:?}");
        assert!(debug_str.contains("ForecastAdapter"));
    }

    #[test]
    fn map_error_connection_failed() {
        let err = OpenMeteoError::ConnectionFailed("timeout".into());
        let app_err = ForecastAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn map_error_rate_limited() {
        let app_err = ForecastAdapter::map_error(OpenMeteoError::RateLimitExceeded);
        assert!(matches!(app_err, ApplicationError::RateLimited));
    }

    #[test]
    fn map_error_invalid_coords() {
        let app_err = ForecastAdapter::map_error(OpenMeteoError::InvalidCoordinates);
        assert!(matches!(app_err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn map_error_parse_failure() {
        let app_err = ForecastAdapter::map_error(OpenMeteoError::ParseError("bad json".into()));
        assert!(matches!(app_err, ApplicationError::Internal(_)));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastAdapter>();
    }
}
