use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::error::WeatherApiError;
use crate::model::Coordinates;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// HTTP client for the OpenWeather "current weather" and "air pollution"
/// endpoints. Performs network I/O only; no retries, transport-default
/// timeouts, and no interpretation of the payload beyond JSON decoding.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different host. Used by tests to talk to a
    /// local mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Current weather at a pair of coordinates, metric units, English
    /// condition descriptions.
    pub async fn current_by_coordinates(
        &self,
        coordinates: Coordinates,
    ) -> Result<RawWeatherResponse, WeatherApiError> {
        let url = format!("{}/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("lang", "en".to_string()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(WeatherApiError::ProviderUnavailable)?;

        decode_body(res).await
    }

    /// Current weather for a city name, metric units. The provider does
    /// fuzzy matching; an unmatched city comes back as a body whose `cod`
    /// field is `"404"`, not as a transport failure, so the HTTP status is
    /// not checked here.
    pub async fn current_by_city(
        &self,
        city: &str,
    ) -> Result<RawWeatherResponse, WeatherApiError> {
        let url = format!("{}/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(WeatherApiError::ProviderUnavailable)?;

        decode_body(res).await
    }

    /// Air quality index at a pair of coordinates.
    pub async fn air_pollution(
        &self,
        coordinates: Coordinates,
    ) -> Result<RawAirResponse, WeatherApiError> {
        let url = format!("{}/air_pollution", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(WeatherApiError::ProviderUnavailable)?;

        decode_body(res).await
    }
}

async fn decode_body<T: for<'de> Deserialize<'de>>(
    res: reqwest::Response,
) -> Result<T, WeatherApiError> {
    let body = res
        .text()
        .await
        .map_err(WeatherApiError::ProviderUnavailable)?;

    serde_json::from_str(&body)
        .map_err(|e| WeatherApiError::MalformedResponse(format!("undecodable body: {e}")))
}

/// Raw decoded "current weather" payload, prior to domain validation.
///
/// Every top-level field the parser needs is optional here: structural
/// checks live in [`crate::parse`], which turns absences into precise
/// `MalformedResponse` failures instead of serde decode errors.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWeatherResponse {
    #[serde(default)]
    pub cod: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main: Option<RawMain>,
    #[serde(default)]
    pub weather: Vec<RawConditionEntry>,
    #[serde(default)]
    pub sys: Option<RawSys>,
    #[serde(default)]
    pub coord: Option<RawCoord>,
}

impl RawWeatherResponse {
    /// The provider's well-known "no such city" signal. The status arrives
    /// as the string `"404"` on by-city misses but as a number elsewhere;
    /// both spellings are accepted.
    pub fn is_city_not_found(&self) -> bool {
        match &self.cod {
            Some(Value::String(s)) => s == "404",
            Some(Value::Number(n)) => n.as_i64() == Some(404),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawConditionEntry {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSys {
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCoord {
    pub lat: f64,
    pub lon: f64,
}

/// Raw decoded "air pollution" payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAirResponse {
    #[serde(default)]
    pub list: Vec<RawAirEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAirEntry {
    pub main: RawAirMain,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAirMain {
    pub aqi: i64,
}
