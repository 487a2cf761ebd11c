//! Port definitions for the application layer
//!
//! Ports are interfaces to external systems; adapters in the
//! infrastructure layer implement them.

mod forecast_port;

#[cfg(test)]
pub use forecast_port::MockForecastPort;
pub use forecast_port::ForecastPort;
