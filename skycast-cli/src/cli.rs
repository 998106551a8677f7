use anyhow::Context;
use clap::{Parser, Subcommand};
use skycast_core::{CityWeather, Config, Coordinates, WeatherObservation, WeatherService};

use crate::{format, localtime, random};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather bot CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    City {
        /// City name; the provider does fuzzy matching.
        name: String,
    },

    /// Show current weather at a pair of coordinates.
    Locate {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },

    /// Show air quality at a pair of coordinates.
    Air {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },

    /// Show the weather at a random spot on Earth.
    Random,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::City { name } => city(&name).await,
            Command::Locate {
                latitude,
                longitude,
            } => locate(latitude, longitude).await,
            Command::Air {
                latitude,
                longitude,
            } => air(latitude, longitude).await,
            Command::Random => random_spot().await,
        }
    }
}

fn service() -> anyhow::Result<WeatherService> {
    let config = Config::load()?;
    let api_key = config.require_api_key()?.to_string();
    Ok(WeatherService::new(api_key))
}

/// The model does not re-validate ranges, so the front-end does.
fn validated(latitude: f64, longitude: f64) -> anyhow::Result<Coordinates> {
    anyhow::ensure!(
        (-90.0..=90.0).contains(&latitude),
        "latitude must be within -90..=90"
    );
    anyhow::ensure!(
        (-180.0..=180.0).contains(&longitude),
        "longitude must be within -180..=180"
    );

    Ok(Coordinates::new(latitude, longitude))
}

fn render(observation: &WeatherObservation, coordinates: Coordinates) -> String {
    let timezone = localtime::resolve_timezone(coordinates);
    let sun = localtime::localize_sun_times(observation.sunrise, observation.sunset, coordinates);

    format::weather_report(observation, timezone, sun)
}

fn configure() -> anyhow::Result<()> {
    // Load the file directly so an env-var override from this shell does not
    // end up persisted.
    let mut config = Config::load_file()?;

    let api_key = inquire::Text::new("OpenWeather API key:")
        .prompt()
        .context("Failed to read API key from prompt")?;

    anyhow::ensure!(!api_key.trim().is_empty(), "API key must not be empty");

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn city(name: &str) -> anyhow::Result<()> {
    let service = service()?;

    match service.weather_in_city(name).await? {
        CityWeather::Found {
            observation,
            coordinates,
        } => {
            print!("{}", render(&observation, coordinates));
        }
        CityWeather::NotFound => {
            tracing::warn!(city = name, "city not recognized by the provider");
            println!("Oops, looks like there is no such city");
            println!("Check the spelling");
        }
    }

    Ok(())
}

async fn locate(latitude: f64, longitude: f64) -> anyhow::Result<()> {
    let coordinates = validated(latitude, longitude)?;
    let observation = service()?.weather_at(coordinates).await?;

    print!("{}", render(&observation, coordinates));
    Ok(())
}

async fn air(latitude: f64, longitude: f64) -> anyhow::Result<()> {
    let coordinates = validated(latitude, longitude)?;
    let quality = service()?.air_quality_at(coordinates).await?;

    println!("Air quality: {}", quality.label());
    Ok(())
}

async fn random_spot() -> anyhow::Result<()> {
    let coordinates = random::random_coordinates();
    println!(
        "Random spot: {}, {}",
        coordinates.latitude, coordinates.longitude
    );

    let observation = service()?.weather_at(coordinates).await?;

    print!("{}", render(&observation, coordinates));
    Ok(())
}
