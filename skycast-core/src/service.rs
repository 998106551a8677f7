use crate::error::WeatherApiError;
use crate::model::{AirQuality, Coordinates, WeatherObservation};
use crate::parse;
use crate::provider::OpenWeatherClient;

/// Outcome of a by-city query.
///
/// An unmatched city is ordinary data, not a failure: callers branch on
/// [`CityWeather::NotFound`] and turn it into their own "check the spelling"
/// message. `Found` also carries the coordinates the provider resolved for
/// the city, so downstream time localization works for places the caller
/// only knows by name.
#[derive(Debug, Clone, PartialEq)]
pub enum CityWeather {
    Found {
        observation: WeatherObservation,
        coordinates: Coordinates,
    },
    NotFound,
}

/// The three query use cases, each one fetch composed with one parse.
///
/// Stateless and reentrant; holds nothing but the HTTP client, so one
/// instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: OpenWeatherClient,
}

impl WeatherService {
    pub fn new(api_key: String) -> Self {
        Self {
            client: OpenWeatherClient::new(api_key),
        }
    }

    pub fn with_client(client: OpenWeatherClient) -> Self {
        Self { client }
    }

    /// Current weather at a pair of coordinates.
    pub async fn weather_at(
        &self,
        coordinates: Coordinates,
    ) -> Result<WeatherObservation, WeatherApiError> {
        let raw = self.client.current_by_coordinates(coordinates).await?;
        parse::parse_observation(&raw)
    }

    /// Current weather for a city name. The not-found check runs before any
    /// parsing, so a miss never surfaces as a malformed-response failure.
    pub async fn weather_in_city(&self, city: &str) -> Result<CityWeather, WeatherApiError> {
        let raw = self.client.current_by_city(city).await?;

        if raw.is_city_not_found() {
            return Ok(CityWeather::NotFound);
        }

        let observation = parse::parse_observation(&raw)?;
        let coordinates = parse::parse_coordinates(&raw)?;

        Ok(CityWeather::Found {
            observation,
            coordinates,
        })
    }

    /// Air quality bucket at a pair of coordinates.
    pub async fn air_quality_at(
        &self,
        coordinates: Coordinates,
    ) -> Result<AirQuality, WeatherApiError> {
        let raw = self.client.air_pollution(coordinates).await?;
        parse::parse_air_quality(&raw)
    }
}
