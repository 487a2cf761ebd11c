//! Weekday display labels
//!
//! Brief and full weekday forms in the panel's fixed Russian locale.
//! The mapping is display data, not configuration.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Brief and full forms of a weekday name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayLabel {
    /// Two-letter form for the forecast strip
    pub brief: &'static str,
    /// Full form for the current-conditions header
    pub full: &'static str,
}

impl WeekdayLabel {
    const fn pair(brief: &'static str, full: &'static str) -> Self {
        Self { brief, full }
    }

    /// Label for a weekday
    #[must_use]
    pub const fn of(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => Self::pair("вс", "Воскресенье"),
            Weekday::Mon => Self::pair("пн", "Понедельник"),
            Weekday::Tue => Self::pair("вт", "Вторник"),
            Weekday::Wed => Self::pair("ср", "Среда"),
            Weekday::Thu => Self::pair("чт", "Четверг"),
            Weekday::Fri => Self::pair("пт", "Пятница"),
            Weekday::Sat => Self::pair("сб", "Суббота"),
        }
    }

    /// Label for the weekday of a calendar date
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self::of(date.weekday())
    }
}

impl fmt::Display for WeekdayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monday_labels() {
        let label = WeekdayLabel::of(Weekday::Mon);
        assert_eq!(label.brief, "пн");
        assert_eq!(label.full, "Понедельник");
    }

    #[test]
    fn sunday_labels() {
        let label = WeekdayLabel::of(Weekday::Sun);
        assert_eq!(label.brief, "вс");
        assert_eq!(label.full, "Воскресенье");
    }

    #[test]
    fn label_for_known_date() {
        // 2024-01-15 was a Monday
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
        assert_eq!(WeekdayLabel::for_date(date).brief, "пн");

        // 2024-01-21 was a Sunday
        let date = NaiveDate::from_ymd_opt(2024, 1, 21).expect("valid date");
        assert_eq!(WeekdayLabel::for_date(date).full, "Воскресенье");
    }

    #[test]
    fn display_uses_full_form() {
        assert_eq!(WeekdayLabel::of(Weekday::Fri).to_string(), "Пятница");
    }

    #[test]
    fn all_weekdays_have_distinct_briefs() {
        let briefs: Vec<&str> = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .map(|d| WeekdayLabel::of(d).brief)
        .collect();
        let mut deduped = briefs.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), briefs.len());
    }
}
