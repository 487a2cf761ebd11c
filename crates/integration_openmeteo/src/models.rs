//! Raw wire types for the Open-Meteo API
//!
//! The hourly block arrives as parallel arrays, one per requested
//! variable plus a timestamp array; `current` is a single flat record of
//! the same variables.

use serde::Deserialize;

/// Raw API response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub current: Option<CurrentData>,
    pub hourly: Option<HourlyData>,
}

/// Flat record of the live observation
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentData {
    pub time: String,
    pub temperature_2m: f64,
    pub precipitation_probability: u8,
    pub relative_humidity_2m: u8,
    pub wind_speed_10m: f64,
    pub weather_code: u16,
}

/// Parallel hourly arrays, one entry per hour
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub precipitation_probability: Vec<u8>,
    pub relative_humidity_2m: Vec<u8>,
    pub wind_speed_10m: Vec<f64>,
    pub weather_code: Vec<u16>,
}
