//! Validation of raw provider payloads into domain records.
//!
//! Classification works by prefix match against an explicitly ordered table,
//! most specific prefix first: the exact code 800 ("clear sky") must win
//! over the generic 80x cloud group, so it sits ahead of `"80"` and is never
//! swallowed by it. A hash lookup would lose that ordering.

use chrono::{DateTime, Utc};

use crate::error::WeatherApiError;
use crate::model::{AirQuality, Coordinates, WeatherCondition, WeatherObservation};
use crate::provider::{RawAirResponse, RawWeatherResponse};

const CONDITION_CLASSES: &[(&str, WeatherCondition)] = &[
    ("800", WeatherCondition::Clear),
    ("80", WeatherCondition::Clouds),
    ("2", WeatherCondition::Thunderstorm),
    ("3", WeatherCondition::Drizzle),
    ("5", WeatherCondition::Rain),
    ("6", WeatherCondition::Snow),
    ("7", WeatherCondition::Fog),
];

const AIR_QUALITY_CLASSES: &[(&str, AirQuality)] = &[
    ("1", AirQuality::Good),
    ("2", AirQuality::Fair),
    ("3", AirQuality::Moderate),
    ("4", AirQuality::Poor),
    ("5", AirQuality::VeryPoor),
];

/// Map a provider condition code (e.g. 211, 803) onto its weather class.
pub fn classify_condition(code: i64) -> Result<WeatherCondition, WeatherApiError> {
    let code = code.to_string();
    CONDITION_CLASSES
        .iter()
        .find(|(prefix, _)| code.starts_with(prefix))
        .map(|(_, condition)| *condition)
        .ok_or_else(|| WeatherApiError::UnrecognizedConditionCode(code))
}

/// Map a provider air quality index (1–5) onto its pollution bucket.
pub fn classify_air_quality(aqi: i64) -> Result<AirQuality, WeatherApiError> {
    let value = aqi.to_string();
    AIR_QUALITY_CLASSES
        .iter()
        .find(|(digit, _)| value.starts_with(digit))
        .map(|(_, quality)| *quality)
        .ok_or_else(|| WeatherApiError::UnrecognizedAirQualityIndex(value))
}

/// Validate a raw "current weather" payload into a [`WeatherObservation`].
///
/// `sys.country` may legitimately be absent and stays optional; every other
/// referenced field is required.
pub fn parse_observation(raw: &RawWeatherResponse) -> Result<WeatherObservation, WeatherApiError> {
    let main = raw
        .main
        .as_ref()
        .ok_or_else(|| WeatherApiError::missing("main"))?;

    let entry = raw
        .weather
        .first()
        .ok_or_else(|| WeatherApiError::missing("weather[0]"))?;

    let sys = raw
        .sys
        .as_ref()
        .ok_or_else(|| WeatherApiError::missing("sys"))?;

    let city = raw
        .name
        .clone()
        .ok_or_else(|| WeatherApiError::missing("name"))?;

    let sunrise = sys
        .sunrise
        .ok_or_else(|| WeatherApiError::missing("sys.sunrise"))?;
    let sunset = sys
        .sunset
        .ok_or_else(|| WeatherApiError::missing("sys.sunset"))?;

    Ok(WeatherObservation {
        temperature: main.temp,
        feels_like: main.feels_like,
        temperature_min: main.temp_min,
        temperature_max: main.temp_max,
        humidity: main.humidity,
        condition: classify_condition(entry.id)?,
        sunrise: sun_instant(sunrise)?,
        sunset: sun_instant(sunset)?,
        city,
        country: sys.country.clone(),
    })
}

/// Validate a raw "air pollution" payload into an [`AirQuality`] bucket.
pub fn parse_air_quality(raw: &RawAirResponse) -> Result<AirQuality, WeatherApiError> {
    let entry = raw
        .list
        .first()
        .ok_or_else(|| WeatherApiError::missing("list[0]"))?;

    classify_air_quality(entry.main.aqi)
}

/// Extract the coordinates the provider resolved for a by-city query, so
/// callers can localize times for a place they only know by name.
pub fn parse_coordinates(raw: &RawWeatherResponse) -> Result<Coordinates, WeatherApiError> {
    let coord = raw
        .coord
        .as_ref()
        .ok_or_else(|| WeatherApiError::missing("coord"))?;

    Ok(Coordinates::new(coord.lat, coord.lon))
}

fn sun_instant(epoch_seconds: i64) -> Result<DateTime<Utc>, WeatherApiError> {
    DateTime::from_timestamp(epoch_seconds, 0).ok_or_else(|| {
        WeatherApiError::MalformedResponse(format!(
            "sun time `{epoch_seconds}` is out of range"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: &str = r#"{
        "coord": {"lat": 51.5072, "lon": -0.1276},
        "main": {"temp": 20.1, "feels_like": 19.5, "temp_min": 18.0, "temp_max": 22.0, "humidity": 55},
        "weather": [{"id": 800}],
        "sys": {"sunrise": 1700000000, "sunset": 1700030000, "country": "GB"},
        "name": "London",
        "cod": 200
    }"#;

    fn raw(json: &str) -> RawWeatherResponse {
        serde_json::from_str(json).expect("test payload must decode")
    }

    #[test]
    fn condition_classes_by_prefix() {
        assert_eq!(classify_condition(211).unwrap(), WeatherCondition::Thunderstorm);
        assert_eq!(classify_condition(301).unwrap(), WeatherCondition::Drizzle);
        assert_eq!(classify_condition(520).unwrap(), WeatherCondition::Rain);
        assert_eq!(classify_condition(600).unwrap(), WeatherCondition::Snow);
        assert_eq!(classify_condition(741).unwrap(), WeatherCondition::Fog);
    }

    #[test]
    fn clear_sky_beats_the_cloud_group() {
        assert_eq!(classify_condition(800).unwrap(), WeatherCondition::Clear);
        assert_eq!(classify_condition(801).unwrap(), WeatherCondition::Clouds);
        assert_eq!(classify_condition(803).unwrap(), WeatherCondition::Clouds);
        assert_eq!(classify_condition(804).unwrap(), WeatherCondition::Clouds);
    }

    #[test]
    fn unknown_condition_code_is_rejected() {
        let err = classify_condition(900).unwrap_err();
        assert!(matches!(err, WeatherApiError::UnrecognizedConditionCode(code) if code == "900"));
    }

    #[test]
    fn air_quality_buckets() {
        assert_eq!(classify_air_quality(1).unwrap(), AirQuality::Good);
        assert_eq!(classify_air_quality(2).unwrap(), AirQuality::Fair);
        assert_eq!(classify_air_quality(3).unwrap(), AirQuality::Moderate);
        assert_eq!(classify_air_quality(4).unwrap(), AirQuality::Poor);
        assert_eq!(classify_air_quality(5).unwrap(), AirQuality::VeryPoor);
    }

    #[test]
    fn out_of_scale_aqi_is_rejected() {
        assert!(classify_air_quality(0).is_err());
        assert!(classify_air_quality(6).is_err());
        assert!(classify_air_quality(-1).is_err());
    }

    #[test]
    fn full_payload_parses() {
        let observation = parse_observation(&raw(LONDON)).unwrap();

        assert_eq!(observation.city, "London");
        assert_eq!(observation.country.as_deref(), Some("GB"));
        assert_eq!(observation.condition, WeatherCondition::Clear);
        assert_eq!(observation.temperature, 20.1);
        assert_eq!(observation.feels_like, 19.5);
        assert_eq!(observation.temperature_min, 18.0);
        assert_eq!(observation.temperature_max, 22.0);
        assert_eq!(observation.humidity, 55);
        assert_eq!(observation.sunrise.timestamp(), 1_700_000_000);
        assert_eq!(observation.sunset.timestamp(), 1_700_030_000);
    }

    #[test]
    fn parsing_is_idempotent() {
        let payload = raw(LONDON);
        let first = parse_observation(&payload).unwrap();
        let second = parse_observation(&payload).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_main_is_malformed() {
        let payload = raw(
            r#"{"weather": [{"id": 800}],
                "sys": {"sunrise": 1700000000, "sunset": 1700030000},
                "name": "London"}"#,
        );
        let err = parse_observation(&payload).unwrap_err();
        assert!(matches!(err, WeatherApiError::MalformedResponse(msg) if msg.contains("main")));
    }

    #[test]
    fn missing_condition_entry_is_malformed() {
        let payload = raw(
            r#"{"main": {"temp": 1.0, "feels_like": 1.0, "temp_min": 1.0, "temp_max": 1.0, "humidity": 50},
                "weather": [],
                "sys": {"sunrise": 1700000000, "sunset": 1700030000},
                "name": "London"}"#,
        );
        let err = parse_observation(&payload).unwrap_err();
        assert!(
            matches!(err, WeatherApiError::MalformedResponse(msg) if msg.contains("weather[0]"))
        );
    }

    #[test]
    fn missing_name_is_malformed() {
        let payload = raw(
            r#"{"main": {"temp": 1.0, "feels_like": 1.0, "temp_min": 1.0, "temp_max": 1.0, "humidity": 50},
                "weather": [{"id": 500}],
                "sys": {"sunrise": 1700000000, "sunset": 1700030000}}"#,
        );
        let err = parse_observation(&payload).unwrap_err();
        assert!(matches!(err, WeatherApiError::MalformedResponse(msg) if msg.contains("name")));
    }

    #[test]
    fn missing_country_still_parses() {
        let payload = raw(
            r#"{"main": {"temp": 1.0, "feels_like": 1.0, "temp_min": 1.0, "temp_max": 1.0, "humidity": 50},
                "weather": [{"id": 500}],
                "sys": {"sunrise": 1700000000, "sunset": 1700030000},
                "name": "Springfield"}"#,
        );
        let observation = parse_observation(&payload).unwrap();
        assert_eq!(observation.country, None);
        assert_eq!(observation.condition, WeatherCondition::Rain);
    }

    #[test]
    fn air_payload_parses() {
        let payload: RawAirResponse =
            serde_json::from_str(r#"{"list": [{"main": {"aqi": 3}}]}"#).unwrap();
        assert_eq!(parse_air_quality(&payload).unwrap(), AirQuality::Moderate);
    }

    #[test]
    fn empty_air_list_is_malformed() {
        let payload: RawAirResponse = serde_json::from_str(r#"{"list": []}"#).unwrap();
        let err = parse_air_quality(&payload).unwrap_err();
        assert!(matches!(err, WeatherApiError::MalformedResponse(msg) if msg.contains("list[0]")));
    }

    #[test]
    fn coordinates_come_from_the_coord_block() {
        let coords = parse_coordinates(&raw(LONDON)).unwrap();
        assert_eq!(coords.latitude, 51.5072);
        assert_eq!(coords.longitude, -0.1276);
    }
}
