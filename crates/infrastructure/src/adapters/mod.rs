//! Port adapters

mod forecast_adapter;

pub use forecast_adapter::ForecastAdapter;
