//! Forecast entities

mod forecast_day;
mod forecast_set;
mod hourly_sample;
mod hourly_series;

pub use forecast_day::{ForecastDay, HOURS_PER_DAY};
pub use forecast_set::{FORECAST_DAYS, ForecastPayload, ForecastSet, MIN_HOURLY_SAMPLES};
pub use hourly_sample::HourlySample;
pub use hourly_series::HourlySeries;
