//! Forecast service
//!
//! Orchestrates fetch and aggregation for the panel's fixed point and
//! holds the latest forecast snapshot. A refresh replaces the snapshot
//! wholesale; readers always see either the previous complete set or the
//! new one, never a partial state.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use domain::{ForecastSet, GeoLocation};
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::ForecastPort;

/// Fetches, aggregates and caches the weekly forecast for one location
pub struct ForecastService {
    source: Arc<dyn ForecastPort>,
    location: GeoLocation,
    latest: ArcSwapOption<ForecastSet>,
}

impl std::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastService")
            .field("location", &self.location)
            .field("has_snapshot", &self.latest.load().is_some())
            .finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a service for a fixed location
    #[must_use]
    pub fn new(source: Arc<dyn ForecastPort>, location: GeoLocation) -> Self {
        Self {
            source,
            location,
            latest: ArcSwapOption::const_empty(),
        }
    }

    /// The location this service forecasts for
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Fetch a fresh payload, aggregate it and swap in the new snapshot
    ///
    /// On any error the previous snapshot stays in place.
    ///
    /// # Errors
    ///
    /// Returns the fetch error, or `MalformedForecastData` when the
    /// payload cannot be aggregated.
    #[instrument(skip(self), fields(location = %self.location))]
    pub async fn refresh(&self) -> Result<Arc<ForecastSet>, ApplicationError> {
        let payload = self.source.fetch_forecast(&self.location).await?;
        debug!(
            hourly_entries = payload.hourly.len(),
            "Fetched forecast payload"
        );

        let set = ForecastSet::build(&payload).map_err(|e| {
            warn!(error = %e, "Fetched payload failed aggregation");
            e
        })?;

        let snapshot = Arc::new(set);
        self.latest.store(Some(Arc::clone(&snapshot)));
        debug!(first_day = %snapshot.today().date(), "Forecast snapshot replaced");
        Ok(snapshot)
    }

    /// The most recent complete snapshot, if any refresh has succeeded
    #[must_use]
    pub fn latest(&self) -> Option<Arc<ForecastSet>> {
        self.latest.load_full()
    }

    /// Whether the upstream provider is currently reachable
    pub async fn is_available(&self) -> bool {
        self.source.is_available().await
    }
}
