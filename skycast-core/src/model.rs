use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point on Earth.
///
/// Callers hand in values already inside the valid ranges (latitude
/// -90..=90, longitude -180..=180); the model does not re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Broad weather classes derived from the provider's condition codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Clear,
    Fog,
    Clouds,
}

impl WeatherCondition {
    /// Display label shown to users, decorative symbol included.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Thunderstorm => "Thunderstorm 🌩",
            WeatherCondition::Drizzle => "Drizzle 🌧",
            WeatherCondition::Rain => "Rain 🌧",
            WeatherCondition::Snow => "Snow 🌨",
            WeatherCondition::Clear => "Clear ☀️",
            WeatherCondition::Fog => "Fog 🌫",
            WeatherCondition::Clouds => "Clouds ☁",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pollution buckets from the provider's air quality index (1–5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirQuality {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
}

impl AirQuality {
    pub fn label(&self) -> &'static str {
        match self {
            AirQuality::Good => "Good 😊",
            AirQuality::Fair => "Fair 😌",
            AirQuality::Moderate => "Moderate 😐",
            AirQuality::Poor => "Poor 😞",
            AirQuality::VeryPoor => "Very Poor 😢",
        }
    }
}

impl std::fmt::Display for AirQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One complete weather snapshot for a place, validated from a single
/// provider response. Temperatures are metric Celsius as requested from the
/// provider; sunrise/sunset stay in UTC, localization is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature: f64,
    pub feels_like: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub humidity: u8,
    pub condition: WeatherCondition,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub city: String,
    /// ISO 3166 alpha-2. The provider omits it for some query shapes.
    pub country: Option<String>,
}
