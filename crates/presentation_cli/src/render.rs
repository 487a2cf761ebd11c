//! Terminal rendering for the weather panel
//!
//! Pure formatting over an aggregated forecast: a current-conditions
//! header and a compact seven-day strip. All output is fixed Russian
//! locale, matching the condition catalog.

use domain::{ConditionEntry, ForecastDay, ForecastSet, HourlySample};
use tracing::warn;

/// Shown when the provider reports a code outside the catalog
const UNKNOWN_CONDITION: ConditionEntry = ConditionEntry {
    label: "Неизвестные условия",
    icon: "https://openweathermap.org/img/wn/50d@2x.png",
};

/// Resolve a sample's condition, falling back to a generic entry
fn condition_of(sample: &HourlySample) -> ConditionEntry {
    sample.condition().unwrap_or_else(|e| {
        warn!(error = %e, "Condition code outside the catalog, using fallback");
        UNKNOWN_CONDITION
    })
}

/// Resolve a day's dominant condition, falling back to a generic entry
fn dominant_condition_of(day: &ForecastDay) -> ConditionEntry {
    day.dominant_condition().unwrap_or_else(|e| {
        warn!(error = %e, "Dominant code outside the catalog, using fallback");
        UNKNOWN_CONDITION
    })
}

#[allow(clippy::cast_possible_truncation)]
fn rounded(value: f64) -> i32 {
    value.round() as i32
}

/// Current-conditions header
///
/// The headline weekday comes from day 0 of the seven-day window; the
/// hour is the caller's local wall-clock hour.
pub fn header(set: &ForecastSet, hour: u32) -> String {
    let current = set.current();
    let condition = condition_of(current);
    format!(
        "🌡  {}°  {}, {hour}:00\n{}\n💧 Осадки: {}   Влажность: {}   💨 Ветер: {} км/ч\n{}",
        rounded(current.temperature()),
        set.today().weekday().full,
        condition.label,
        current.precipitation_probability(),
        current.relative_humidity(),
        rounded(current.wind_speed()),
        condition.icon,
    )
}

/// One line of the seven-day strip
fn day_line(day: &ForecastDay) -> String {
    let condition = dominant_condition_of(day);
    format!(
        "{}  днём {}°  ночью {}°  {}  {}",
        day.weekday().brief,
        day.avg_day_temperature(),
        day.avg_night_temperature(),
        condition.label,
        condition.icon,
    )
}

/// Seven-day strip, one line per day starting with today
pub fn week_strip(set: &ForecastSet) -> String {
    set.days()
        .iter()
        .map(day_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use domain::{
        ForecastPayload, HourlySeries, MIN_HOURLY_SAMPLES, Percentage,
    };

    fn sample(temperature: f64, code: u16) -> HourlySample {
        HourlySample::new(
            temperature,
            Percentage::clamped(30),
            Percentage::clamped(60),
            12.4,
            code,
        )
    }

    fn build_set(current_code: u16, hourly_code: u16) -> ForecastSet {
        let start = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        let time: Vec<NaiveDateTime> = (0..MIN_HOURLY_SAMPLES as i64)
            .map(|h| start + chrono::Duration::hours(h))
            .collect();
        let samples = vec![sample(-7.6, hourly_code); MIN_HOURLY_SAMPLES];
        let payload = ForecastPayload {
            current: sample(-7.6, current_code),
            hourly: HourlySeries::new(time, samples).unwrap(),
        };
        ForecastSet::build(&payload).unwrap()
    }

    #[test]
    fn header_shows_rounded_temperature_and_weekday() {
        let set = build_set(3, 3);

        let out = header(&set, 14);

        assert!(out.contains("-8°"), "rounded away from zero: {out}");
        assert!(out.contains("Понедельник, 14:00"));
        assert!(out.contains("Пасмурно"));
        assert!(out.contains("Осадки: 30%"));
        assert!(out.contains("Влажность: 60%"));
        assert!(out.contains("Ветер: 12 км/ч"));
        assert!(out.contains("04d@2x.png"));
    }

    #[test]
    fn header_falls_back_on_unknown_code() {
        let set = build_set(42, 3);

        let out = header(&set, 9);

        assert!(out.contains(UNKNOWN_CONDITION.label));
        assert!(out.contains(UNKNOWN_CONDITION.icon));
    }

    #[test]
    fn week_strip_has_one_line_per_day() {
        let set = build_set(0, 61);

        let out = week_strip(&set);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("пн"));
        assert!(lines[6].starts_with("вс"));
        for line in &lines {
            assert!(line.contains("Дождь: слабый"), "{line}");
            assert!(line.contains("10d@2x.png"), "{line}");
        }
    }

    #[test]
    fn day_line_shows_both_averages() {
        let set = build_set(0, 0);

        let line = day_line(&set.days()[0]);

        assert!(line.contains("днём -8°"));
        assert!(line.contains("ночью -8°"));
    }
}
