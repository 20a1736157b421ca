use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};

use skywatch_core::provider::geocode::{Geocoder, default_location};
use skywatch_core::{Config, Location, WeatherReading, moon_phase, provider};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skywatch", version, about = "Weather dashboard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the weather dashboard for a location.
    Show {
        /// Latitude in degrees; requires --lon.
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude in degrees; requires --lat.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Set the home location used when no coordinates are passed.
    Configure,

    /// Show the lunar phase for a date.
    Moon {
        /// Date in YYYY-MM-DD form; defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { lat, lon } => show(lat, lon).await,
            Command::Configure => configure(),
            Command::Moon { date } => moon(date),
        }
    }
}

async fn show(lat: Option<f64>, lon: Option<f64>) -> anyhow::Result<()> {
    let location = resolve_location(lat, lon).await?;

    let provider = provider::default_provider();
    let snapshot = provider.fetch_forecast(&location).await?;
    let air = provider.fetch_air_quality(&location).await?;

    let reading = WeatherReading::from_observations(&snapshot.current, &air);
    let moon = moon_phase(Local::now().date_naive());

    println!("{}", render::dashboard(&location, &snapshot, &air, &reading, &moon));
    Ok(())
}

/// Explicit coordinates win over the configured home, which wins over the
/// built-in default location.
async fn resolve_location(lat: Option<f64>, lon: Option<f64>) -> anyhow::Result<Location> {
    if let (Some(lat), Some(lon)) = (lat, lon) {
        if !(-90.0..=90.0).contains(&lat) {
            bail!("Latitude must be between -90 and 90, got {lat}");
        }
        if !(-180.0..=180.0).contains(&lon) {
            bail!("Longitude must be between -180 and 180, got {lon}");
        }
        return Ok(Geocoder::new().resolve(lat, lon).await);
    }

    let config = Config::load()?;
    Ok(config.home.unwrap_or_else(default_location))
}

fn configure() -> anyhow::Result<()> {
    let latitude = CustomType::<f64>::new("Latitude:")
        .with_help_message("Decimal degrees, -90 to 90")
        .prompt()
        .context("Failed to read latitude")?;
    if !(-90.0..=90.0).contains(&latitude) {
        bail!("Latitude must be between -90 and 90, got {latitude}");
    }

    let longitude = CustomType::<f64>::new("Longitude:")
        .with_help_message("Decimal degrees, -180 to 180")
        .prompt()
        .context("Failed to read longitude")?;
    if !(-180.0..=180.0).contains(&longitude) {
        bail!("Longitude must be between -180 and 180, got {longitude}");
    }

    let city = Text::new("City (optional):").prompt().context("Failed to read city")?;
    let country = Text::new("Country (optional):").prompt().context("Failed to read country")?;

    let mut config = Config::load()?;
    config.set_home(Location {
        latitude,
        longitude,
        city: non_empty(city),
        country: non_empty(country),
    });
    config.save()?;

    println!("Saved home location to {}", Config::config_file_path()?.display());
    Ok(())
}

fn moon(date: Option<String>) -> anyhow::Result<()> {
    let date = match date {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{raw}', expected YYYY-MM-DD"))?,
        None => Local::now().date_naive(),
    };

    println!("{}", render::moon_section(date, &moon_phase(date)));
    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}
