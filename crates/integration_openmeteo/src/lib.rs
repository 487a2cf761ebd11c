//! Open-Meteo forecast integration
//!
//! Client for the Open-Meteo Weather API (<https://open-meteo.com>).
//! Fetches the current observation plus the hourly series the aggregation
//! core consumes. No API key required.

pub mod client;
mod models;

pub use client::{OpenMeteoClient, OpenMeteoConfig, OpenMeteoError};
