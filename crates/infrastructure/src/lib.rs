//! Infrastructure layer - configuration and port adapters

pub mod adapters;
pub mod config;

pub use adapters::ForecastAdapter;
pub use config::{AppConfig, LocationConfig};
