//! Core library for the `skycast` weather bot.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - An HTTP client for the OpenWeather API
//! - Validation of raw provider payloads into shared domain models
//!
//! It is used by `skycast-cli`, but can also be reused by other front-ends
//! (a chat transport, a desktop widget) that render the same observations.

pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod provider;
pub mod service;

pub use config::Config;
pub use error::WeatherApiError;
pub use model::{AirQuality, Coordinates, WeatherCondition, WeatherObservation};
pub use provider::OpenWeatherClient;
pub use service::{CityWeather, WeatherService};
