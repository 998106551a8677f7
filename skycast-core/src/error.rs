use thiserror::Error;

/// Failures produced by the weather acquisition pipeline.
///
/// "City not found" is deliberately not in here: the provider reports it
/// inside an otherwise well-formed body, and callers branch on
/// [`crate::service::CityWeather::NotFound`] instead of catching an error.
#[derive(Debug, Error)]
pub enum WeatherApiError {
    /// The provider could not be reached at the transport level.
    #[error("weather provider is unreachable")]
    ProviderUnavailable(#[source] reqwest::Error),

    /// The provider answered, but the payload is structurally unusable.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// The condition code matched none of the known classes.
    #[error("unrecognized weather condition code `{0}`")]
    UnrecognizedConditionCode(String),

    /// The air quality index fell outside the 1–5 scale.
    #[error("unrecognized air quality index `{0}`")]
    UnrecognizedAirQualityIndex(String),
}

impl WeatherApiError {
    pub(crate) fn missing(field: &str) -> Self {
        WeatherApiError::MalformedResponse(format!("missing `{field}`"))
    }
}
