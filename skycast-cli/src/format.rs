//! Human-readable rendering of observations.

use skycast_core::WeatherObservation;

use crate::localtime::SunTimes;

/// The multi-line weather report shown for every query mode.
///
/// Sunrise/sunset fall back to UTC when no local clock could be resolved;
/// the flag line degrades to the bare city name when the provider omitted
/// the country.
pub fn weather_report(
    observation: &WeatherObservation,
    timezone: Option<(String, String)>,
    sun: Option<SunTimes>,
) -> String {
    let mut out = String::new();

    if let Some((zone, local_time)) = timezone {
        out.push_str(&format!("Time zone {zone}\n"));
        out.push_str(&format!("Local time {local_time}\n"));
        out.push_str(&format!("{}\n", "*".repeat(10)));
    }

    match observation.country.as_deref().and_then(country_flag) {
        Some(flag) => out.push_str(&format!(
            "{} ({flag}), temperature {}°C\n",
            observation.city, observation.temperature
        )),
        None => out.push_str(&format!(
            "{}, temperature {}°C\n",
            observation.city, observation.temperature
        )),
    }

    out.push_str(&format!("{}\n", observation.condition.label()));
    out.push_str(&format!("Feels like {}°C\n", observation.feels_like));
    out.push_str(&format!(
        "Max temperature: {}°C\n",
        observation.temperature_max
    ));
    out.push_str(&format!(
        "Min temperature: {}°C\n",
        observation.temperature_min
    ));
    out.push_str(&format!("Humidity: {}%\n", observation.humidity));

    let (sunrise, sunset) = match &sun {
        Some(sun) => (
            sun.sunrise.format("%H:%M").to_string(),
            sun.sunset.format("%H:%M").to_string(),
        ),
        None => (
            observation.sunrise.format("%H:%M").to_string(),
            observation.sunset.format("%H:%M").to_string(),
        ),
    };
    out.push_str(&format!("Sunrise: {sunrise}\n"));
    out.push_str(&format!("Sunset: {sunset}\n"));

    out
}

/// ISO 3166 alpha-2 code to its regional-indicator flag. Anything but two
/// ASCII letters renders no flag.
fn country_flag(code: &str) -> Option<String> {
    let code = code.trim();
    if code.len() != 2 {
        return None;
    }

    code.chars()
        .map(|c| {
            let c = c.to_ascii_uppercase();
            if c.is_ascii_uppercase() {
                char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32))
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use skycast_core::WeatherCondition;

    fn observation(country: Option<&str>) -> WeatherObservation {
        WeatherObservation {
            temperature: 20.1,
            feels_like: 19.5,
            temperature_min: 18.0,
            temperature_max: 22.0,
            humidity: 55,
            condition: WeatherCondition::Clear,
            sunrise: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            sunset: DateTime::from_timestamp(1_700_030_000, 0).unwrap(),
            city: "London".to_string(),
            country: country.map(str::to_string),
        }
    }

    #[test]
    fn flags_for_known_codes() {
        assert_eq!(country_flag("GB").as_deref(), Some("🇬🇧"));
        assert_eq!(country_flag("ua").as_deref(), Some("🇺🇦"));
    }

    #[test]
    fn no_flag_for_junk_codes() {
        assert_eq!(country_flag("G8"), None);
        assert_eq!(country_flag("GBR"), None);
        assert_eq!(country_flag(""), None);
    }

    #[test]
    fn report_carries_every_field() {
        let report = weather_report(&observation(Some("GB")), None, None);

        assert!(report.contains("London (🇬🇧), temperature 20.1°C"));
        assert!(report.contains("Clear ☀️"));
        assert!(report.contains("Feels like 19.5°C"));
        assert!(report.contains("Max temperature: 22°C"));
        assert!(report.contains("Min temperature: 18°C"));
        assert!(report.contains("Humidity: 55%"));
        assert!(report.contains("Sunrise: 22:13"));
        assert!(report.contains("Sunset: 06:33"));
    }

    #[test]
    fn missing_country_drops_the_flag_parens() {
        let report = weather_report(&observation(None), None, None);
        assert!(report.contains("London, temperature 20.1°C"));
        assert!(!report.contains('('));
    }

    #[test]
    fn timezone_header_is_prepended_when_resolved() {
        let report = weather_report(
            &observation(Some("GB")),
            Some(("UTC+00:00".to_string(), "12:00".to_string())),
            None,
        );

        assert!(report.starts_with("Time zone UTC+00:00\nLocal time 12:00\n**********\n"));
    }
}
