//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Hourly series too short, gapped, non-chronological or otherwise
    /// unusable for aggregation
    #[error("Malformed forecast data: {0}")]
    MalformedForecastData(String),

    /// Weather code absent from the condition catalog
    #[error("Unknown weather condition code: {0}")]
    UnknownConditionCode(u16),
}

impl DomainError {
    /// Create a malformed-data error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedForecastData(reason.into())
    }
}
