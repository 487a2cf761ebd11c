//! Application layer - orchestration of the forecast model
//!
//! Defines the port through which raw forecast data enters the system and
//! the service that turns fetched payloads into the current forecast
//! snapshot.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
