//! Weather condition catalog
//!
//! Static mapping from the provider's WMO weather codes to display data:
//! a descriptive label (fixed Russian locale) and an icon URI. The catalog
//! is read-only for the process lifetime; lookups outside the known code
//! set are an error, never a silent default.

use serde::Serialize;

use crate::errors::DomainError;

/// Display data for one weather condition code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionEntry {
    /// Human-readable condition description
    pub label: &'static str,
    /// Icon URI for the condition
    pub icon: &'static str,
}

/// Every weather code the catalog recognizes
pub const KNOWN_CODES: [u16; 28] = [
    0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82, 85,
    86, 95, 96, 99,
];

const fn entry(label: &'static str, icon: &'static str) -> ConditionEntry {
    ConditionEntry { label, icon }
}

/// Look up a weather code in the catalog
///
/// Icons follow the openweathermap day icon set.
#[must_use]
pub const fn lookup(code: u16) -> Option<ConditionEntry> {
    match code {
        0 => Some(entry(
            "Ясное небо",
            "https://openweathermap.org/img/wn/01d@2x.png",
        )),
        1 => Some(entry(
            "В основном ясно",
            "https://openweathermap.org/img/wn/02d@2x.png",
        )),
        2 => Some(entry(
            "Переменная облачность",
            "https://openweathermap.org/img/wn/03d@2x.png",
        )),
        3 => Some(entry(
            "Пасмурно",
            "https://openweathermap.org/img/wn/04d@2x.png",
        )),
        45 => Some(entry(
            "Туман",
            "https://openweathermap.org/img/wn/50d@2x.png",
        )),
        48 => Some(entry(
            "Оседающий иней",
            "https://openweathermap.org/img/wn/50d@2x.png",
        )),
        51 => Some(entry(
            "Морось: слабая",
            "https://openweathermap.org/img/wn/09d@2x.png",
        )),
        53 => Some(entry(
            "Морось: умеренная",
            "https://openweathermap.org/img/wn/09d@2x.png",
        )),
        55 => Some(entry(
            "Морось: интенсивная",
            "https://openweathermap.org/img/wn/09d@2x.png",
        )),
        56 => Some(entry(
            "Замерзающая морось: слабая",
            "https://openweathermap.org/img/wn/09d@2x.png",
        )),
        57 => Some(entry(
            "Замерзающая морось: плотная интенсивность",
            "https://openweathermap.org/img/wn/09d@2x.png",
        )),
        61 => Some(entry(
            "Дождь: слабый",
            "https://openweathermap.org/img/wn/10d@2x.png",
        )),
        63 => Some(entry(
            "Дождь: умеренный",
            "https://openweathermap.org/img/wn/10d@2x.png",
        )),
        65 => Some(entry(
            "Дождь: сильный",
            "https://openweathermap.org/img/wn/10d@2x.png",
        )),
        66 => Some(entry(
            "Ледяной дождь: слабой интенсивности",
            "https://openweathermap.org/img/wn/10d@2x.png",
        )),
        67 => Some(entry(
            "Ледяной дождь: сильной интенсивности",
            "https://openweathermap.org/img/wn/10d@2x.png",
        )),
        71 => Some(entry(
            "Снегопад: слабый",
            "https://openweathermap.org/img/wn/13d@2x.png",
        )),
        73 => Some(entry(
            "Снегопад: умеренный",
            "https://openweathermap.org/img/wn/13d@2x.png",
        )),
        75 => Some(entry(
            "Снегопад: сильный",
            "https://openweathermap.org/img/wn/13d@2x.png",
        )),
        77 => Some(entry(
            "Снежные зерна",
            "https://openweathermap.org/img/wn/13d@2x.png",
        )),
        80 => Some(entry(
            "Ливневые дожди: слабые",
            "https://openweathermap.org/img/wn/09d@2x.png",
        )),
        81 => Some(entry(
            "Ливневые дожди: умеренные",
            "https://openweathermap.org/img/wn/09d@2x.png",
        )),
        82 => Some(entry(
            "Ливневые дожди: сильные",
            "https://openweathermap.org/img/wn/09d@2x.png",
        )),
        85 => Some(entry(
            "Снежные ливни: небольшие",
            "https://openweathermap.org/img/wn/13d@2x.png",
        )),
        86 => Some(entry(
            "Снежные ливни: сильные",
            "https://openweathermap.org/img/wn/13d@2x.png",
        )),
        95 => Some(entry(
            "Гроза: слабая или умеренная",
            "https://openweathermap.org/img/wn/11d@2x.png",
        )),
        96 => Some(entry(
            "Гроза с небольшим градом",
            "https://openweathermap.org/img/wn/11d@2x.png",
        )),
        99 => Some(entry(
            "Гроза с сильным градом",
            "https://openweathermap.org/img/wn/11d@2x.png",
        )),
        _ => None,
    }
}

/// Resolve a weather code to its display entry
///
/// # Errors
///
/// Returns `UnknownConditionCode` when the code is not in the catalog.
/// No fallback is substituted here; callers decide how to display an
/// unrecognized code.
pub fn resolve(code: u16) -> Result<ConditionEntry, DomainError> {
    lookup(code).ok_or(DomainError::UnknownConditionCode(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expected icon file per code, grouped by condition family
    const ICON_FILES: [(u16, &str); 28] = [
        (0, "01d@2x.png"),
        (1, "02d@2x.png"),
        (2, "03d@2x.png"),
        (3, "04d@2x.png"),
        (45, "50d@2x.png"),
        (48, "50d@2x.png"),
        (51, "09d@2x.png"),
        (53, "09d@2x.png"),
        (55, "09d@2x.png"),
        (56, "09d@2x.png"),
        (57, "09d@2x.png"),
        (61, "10d@2x.png"),
        (63, "10d@2x.png"),
        (65, "10d@2x.png"),
        (66, "10d@2x.png"),
        (67, "10d@2x.png"),
        (71, "13d@2x.png"),
        (73, "13d@2x.png"),
        (75, "13d@2x.png"),
        (77, "13d@2x.png"),
        (80, "09d@2x.png"),
        (81, "09d@2x.png"),
        (82, "09d@2x.png"),
        (85, "13d@2x.png"),
        (86, "13d@2x.png"),
        (95, "11d@2x.png"),
        (96, "11d@2x.png"),
        (99, "11d@2x.png"),
    ];

    #[test]
    fn resolve_every_known_code() {
        assert_eq!(ICON_FILES.len(), KNOWN_CODES.len());
        for (code, icon_file) in ICON_FILES {
            let got = resolve(code).unwrap_or_else(|_| panic!("code {code} should resolve"));
            assert!(!got.label.is_empty(), "code {code} has no label");
            assert_eq!(
                got.icon,
                format!("https://openweathermap.org/img/wn/{icon_file}"),
                "code {code} icon mismatch"
            );
        }
    }

    #[test]
    fn every_known_code_has_a_distinct_label() {
        let mut labels: Vec<&str> = KNOWN_CODES
            .iter()
            .map(|&code| resolve(code).expect("known code").label)
            .collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), KNOWN_CODES.len());
    }

    #[test]
    fn resolve_clear_sky() {
        let got = resolve(0).expect("code 0 is known");
        assert_eq!(got.label, "Ясное небо");
        assert_eq!(got.icon, "https://openweathermap.org/img/wn/01d@2x.png");
    }

    #[test]
    fn resolve_light_rain() {
        let got = resolve(61).expect("code 61 is known");
        assert_eq!(got.label, "Дождь: слабый");
        assert_eq!(got.icon, "https://openweathermap.org/img/wn/10d@2x.png");
    }

    #[test]
    fn resolve_thunderstorm_with_heavy_hail() {
        let got = resolve(99).expect("code 99 is known");
        assert_eq!(got.label, "Гроза с сильным градом");
    }

    #[test]
    fn resolve_unknown_code_is_an_error() {
        let result = resolve(999);
        assert!(matches!(result, Err(DomainError::UnknownConditionCode(999))));
    }

    #[test]
    fn resolve_code_between_known_values() {
        // 4 sits between known codes 3 and 45
        assert!(matches!(
            resolve(4),
            Err(DomainError::UnknownConditionCode(4))
        ));
    }

    #[test]
    fn lookup_matches_resolve() {
        assert_eq!(lookup(3), resolve(3).ok());
        assert_eq!(lookup(100), None);
    }

    #[test]
    fn fog_codes_share_an_icon() {
        let fog = resolve(45).expect("known");
        let rime = resolve(48).expect("known");
        assert_eq!(fog.icon, rime.icon);
        assert_ne!(fog.label, rime.label);
    }
}
