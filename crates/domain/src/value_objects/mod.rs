//! Value objects for the forecast model

mod geo_location;
mod percentage;
mod weekday_label;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use percentage::{InvalidPercentage, Percentage};
pub use weekday_label::WeekdayLabel;
