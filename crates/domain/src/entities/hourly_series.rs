//! Raw hourly time series as delivered by the forecast provider

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::entities::HourlySample;
use crate::errors::DomainError;

/// A time-indexed hourly series: one timestamp per sample, in provider
/// local time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlySeries {
    time: Vec<NaiveDateTime>,
    samples: Vec<HourlySample>,
}

impl HourlySeries {
    /// Create a series from parallel timestamp and sample vectors
    ///
    /// # Errors
    ///
    /// Returns `MalformedForecastData` if the vectors differ in length.
    /// Chronology is validated at aggregation time.
    pub fn new(
        time: Vec<NaiveDateTime>,
        samples: Vec<HourlySample>,
    ) -> Result<Self, DomainError> {
        if time.len() != samples.len() {
            return Err(DomainError::malformed(format!(
                "timestamp/sample length mismatch: {} timestamps, {} samples",
                time.len(),
                samples.len()
            )));
        }
        Ok(Self { time, samples })
    }

    /// Number of hourly entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Timestamps, in input order
    #[must_use]
    pub fn time(&self) -> &[NaiveDateTime] {
        &self.time
    }

    /// Samples, in input order
    #[must_use]
    pub fn samples(&self) -> &[HourlySample] {
        &self.samples
    }
}
