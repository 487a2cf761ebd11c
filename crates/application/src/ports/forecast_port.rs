//! Forecast data port
//!
//! Defines how raw forecast payloads enter the system. The upstream fetch,
//! its retry policy and its transport failures all live behind this
//! boundary; the aggregation core is only invoked with a complete payload.

use async_trait::async_trait;
use domain::{ForecastPayload, GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching raw forecast data for a location
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the current observation and the hourly series for a location
    async fn fetch_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<ForecastPayload, ApplicationError>;

    /// Check if the upstream forecast provider is reachable
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ForecastPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ForecastPort>();
    }
}
