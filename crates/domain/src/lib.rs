//! Domain layer for pogoda
//!
//! The forecast aggregation model: hourly samples, day aggregates with
//! derived statistics, the weekly forecast set and the weather condition
//! catalog. This layer is pure and has no I/O.

pub mod conditions;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use conditions::ConditionEntry;
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
