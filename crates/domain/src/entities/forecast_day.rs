//! One calendar day of forecast with derived statistics
//!
//! A day owns exactly 24 hourly samples (local hours 00:00-23:00). All
//! derived values are pure functions of those samples and are recomputed
//! on every read; the day itself is immutable, so rereads are identical.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::conditions::{self, ConditionEntry};
use crate::entities::HourlySample;
use crate::errors::DomainError;
use crate::value_objects::WeekdayLabel;

/// Number of samples a day always holds
pub const HOURS_PER_DAY: usize = 24;

/// Night window: local hours [0, 9)
const NIGHT_HOURS: std::ops::Range<usize> = 0..9;
/// Day window: local hours [9, 24)
const DAY_HOURS: std::ops::Range<usize> = 9..24;

/// One calendar day of forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    date: NaiveDate,
    hours: Vec<HourlySample>,
}

impl ForecastDay {
    /// Create a day from exactly 24 samples in hour-of-day order
    ///
    /// # Errors
    ///
    /// Returns `MalformedForecastData` if the window is not exactly 24
    /// samples.
    pub fn new(date: NaiveDate, hours: Vec<HourlySample>) -> Result<Self, DomainError> {
        if hours.len() != HOURS_PER_DAY {
            return Err(DomainError::malformed(format!(
                "day window for {date} has {} samples, expected {HOURS_PER_DAY}",
                hours.len()
            )));
        }
        Ok(Self { date, hours })
    }

    /// The day's calendar date
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The 24 underlying hourly samples, hour-of-day ascending
    #[must_use]
    pub fn hours(&self) -> &[HourlySample] {
        &self.hours
    }

    /// Weekday label pair for the day's date
    #[must_use]
    pub fn weekday(&self) -> WeekdayLabel {
        WeekdayLabel::for_date(self.date)
    }

    /// Average temperature over hours [0, 9), rounded
    #[must_use]
    pub fn avg_night_temperature(&self) -> i32 {
        Self::rounded_mean(&self.hours[NIGHT_HOURS])
    }

    /// Average temperature over hours [9, 24), rounded
    #[must_use]
    pub fn avg_day_temperature(&self) -> i32 {
        Self::rounded_mean(&self.hours[DAY_HOURS])
    }

    /// The weather code occurring most often across the 24 samples
    ///
    /// On equal counts the higher code value wins.
    #[must_use]
    pub fn dominant_code(&self) -> u16 {
        let mut counts: HashMap<u16, usize> = HashMap::new();
        for hour in &self.hours {
            *counts.entry(hour.weather_code()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .max_by_key(|&(code, count)| (count, code))
            .map_or(0, |(code, _)| code)
    }

    /// Resolve the dominant weather code against the condition catalog
    ///
    /// # Errors
    ///
    /// Returns `UnknownConditionCode` if the dominant code is not in the
    /// catalog.
    pub fn dominant_condition(&self) -> Result<ConditionEntry, DomainError> {
        conditions::resolve(self.dominant_code())
    }

    /// Mean temperature rounded half away from zero
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn rounded_mean(samples: &[HourlySample]) -> i32 {
        let sum: f64 = samples.iter().map(HourlySample::temperature).sum();
        (sum / samples.len() as f64).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Percentage;

    fn sample(temperature: f64, code: u16) -> HourlySample {
        HourlySample::new(
            temperature,
            Percentage::clamped(0),
            Percentage::clamped(50),
            5.0,
            code,
        )
    }

    fn date() -> NaiveDate {
        // A Monday
        NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
    }

    fn day_with(hours: Vec<HourlySample>) -> ForecastDay {
        ForecastDay::new(date(), hours).expect("24 samples")
    }

    #[test]
    fn rejects_short_window() {
        let result = ForecastDay::new(date(), vec![sample(0.0, 0); 23]);
        assert!(matches!(
            result,
            Err(DomainError::MalformedForecastData(_))
        ));
    }

    #[test]
    fn rejects_long_window() {
        let result = ForecastDay::new(date(), vec![sample(0.0, 0); 25]);
        assert!(result.is_err());
    }

    #[test]
    fn averages_over_alternating_temperatures() {
        // Hours alternate 0/10 starting at 0.
        // Night [0,9): 0,10,0,10,0,10,0,10,0 -> 40/9 = 4.44 -> 4
        // Day [9,24): 10,0,... (8 tens, 7 zeros) -> 80/15 = 5.33 -> 5
        let hours: Vec<_> = (0..24)
            .map(|i| sample(if i % 2 == 0 { 0.0 } else { 10.0 }, 0))
            .collect();
        let day = day_with(hours);
        assert_eq!(day.avg_night_temperature(), 4);
        assert_eq!(day.avg_day_temperature(), 5);
    }

    #[test]
    fn averages_round_half_away_from_zero() {
        // Night mean: (9 * 0.5) / 9 = 0.5 -> 1
        let mut hours = vec![sample(0.5, 0); 9];
        hours.extend(vec![sample(2.0, 0); 15]);
        let day = day_with(hours);
        assert_eq!(day.avg_night_temperature(), 1);
        assert_eq!(day.avg_day_temperature(), 2);
    }

    #[test]
    fn averages_of_flat_day() {
        let mut hours = vec![sample(5.0, 61); 9];
        hours.extend(vec![sample(15.0, 61); 15]);
        let day = day_with(hours);
        assert_eq!(day.avg_night_temperature(), 5);
        assert_eq!(day.avg_day_temperature(), 15);
    }

    #[test]
    fn dominant_code_by_majority() {
        // Code 3 appears 10 times, code 61 appears 14 times.
        let mut hours = vec![sample(0.0, 3); 10];
        hours.extend(vec![sample(0.0, 61); 14]);
        assert_eq!(day_with(hours).dominant_code(), 61);
    }

    #[test]
    fn dominant_code_majority_of_lower_code_wins() {
        // Code 3 appears 14 times, code 61 only 10 times.
        let mut hours = vec![sample(0.0, 3); 14];
        hours.extend(vec![sample(0.0, 61); 10]);
        assert_eq!(day_with(hours).dominant_code(), 3);
    }

    #[test]
    fn dominant_code_tie_prefers_higher_code() {
        // 12 samples each for codes 3 and 61.
        let mut hours = vec![sample(0.0, 3); 12];
        hours.extend(vec![sample(0.0, 61); 12]);
        assert_eq!(day_with(hours).dominant_code(), 61);
    }

    #[test]
    fn dominant_condition_resolves_catalog_entry() {
        let hours = vec![sample(0.0, 61); 24];
        let entry = day_with(hours)
            .dominant_condition()
            .expect("code 61 is known");
        assert_eq!(entry.label, "Дождь: слабый");
    }

    #[test]
    fn dominant_condition_surfaces_unknown_code() {
        let hours = vec![sample(0.0, 42); 24];
        assert!(matches!(
            day_with(hours).dominant_condition(),
            Err(DomainError::UnknownConditionCode(42))
        ));
    }

    #[test]
    fn weekday_of_known_date() {
        let day = day_with(vec![sample(0.0, 0); 24]);
        assert_eq!(day.weekday().brief, "пн");
        assert_eq!(day.weekday().full, "Понедельник");
    }

    #[test]
    fn derived_accessors_are_idempotent() {
        let hours: Vec<_> = (0..24)
            .map(|i| sample(f64::from(i) * 0.7 - 3.0, if i < 12 { 2 } else { 63 }))
            .collect();
        let day = day_with(hours);
        assert_eq!(day.avg_night_temperature(), day.avg_night_temperature());
        assert_eq!(day.avg_day_temperature(), day.avg_day_temperature());
        assert_eq!(day.dominant_code(), day.dominant_code());
    }
}
