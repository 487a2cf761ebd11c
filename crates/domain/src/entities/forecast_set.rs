//! Aggregation root: current conditions plus the seven-day strip

use chrono::Duration;
use serde::Serialize;

use crate::entities::{ForecastDay, HOURS_PER_DAY, HourlySample, HourlySeries};
use crate::errors::DomainError;

/// Days in one forecast set
pub const FORECAST_DAYS: usize = 7;

/// Minimum hourly entries needed to aggregate a full week
pub const MIN_HOURLY_SAMPLES: usize = FORECAST_DAYS * HOURS_PER_DAY;

/// The raw input to aggregation: the provider's live observation plus the
/// hourly series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPayload {
    /// The standalone current-conditions sample. Not part of the hourly
    /// series and never folded into day statistics.
    pub current: HourlySample,
    /// The chronological hourly series
    pub hourly: HourlySeries,
}

/// An immutable weekly forecast snapshot
///
/// Built once per fetched payload; a new fetch produces a wholly new set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSet {
    current: HourlySample,
    days: Vec<ForecastDay>,
}

impl ForecastSet {
    /// Build the weekly aggregate from a raw payload
    ///
    /// The hourly series must hold at least 168 entries at exact one-hour
    /// steps; anything shorter or gapped fails without producing a partial
    /// result. The first 168 samples are sliced into seven contiguous
    /// 24-sample windows, window `k` becoming day `k`. A day's calendar
    /// date is read from the window's LAST timestamp (hour 23); deriving
    /// it from the first sample instead would shift every weekday label by
    /// one day.
    ///
    /// # Errors
    ///
    /// Returns `MalformedForecastData` for a short or gapped series.
    pub fn build(payload: &ForecastPayload) -> Result<Self, DomainError> {
        let series = &payload.hourly;
        if series.len() < MIN_HOURLY_SAMPLES {
            return Err(DomainError::malformed(format!(
                "hourly series has {} entries, need at least {MIN_HOURLY_SAMPLES}",
                series.len()
            )));
        }

        let time = &series.time()[..MIN_HOURLY_SAMPLES];
        for pair in time.windows(2) {
            if pair[1] - pair[0] != Duration::hours(1) {
                return Err(DomainError::malformed(format!(
                    "hourly series is not a gapless chronological sequence: \
                     {} is followed by {}",
                    pair[0], pair[1]
                )));
            }
        }

        let mut days = Vec::with_capacity(FORECAST_DAYS);
        for k in 0..FORECAST_DAYS {
            let window = k * HOURS_PER_DAY..(k + 1) * HOURS_PER_DAY;
            let date = time[window.end - 1].date();
            days.push(ForecastDay::new(
                date,
                series.samples()[window].to_vec(),
            )?);
        }

        Ok(Self {
            current: payload.current,
            days,
        })
    }

    /// The standalone current-conditions sample
    #[must_use]
    pub const fn current(&self) -> &HourlySample {
        &self.current
    }

    /// The seven days, day 0 being today
    #[must_use]
    pub fn days(&self) -> &[ForecastDay] {
        &self.days
    }

    /// Today's forecast day
    #[must_use]
    pub fn today(&self) -> &ForecastDay {
        &self.days[0]
    }
}
