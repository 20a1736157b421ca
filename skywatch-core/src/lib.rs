//! Core library for the `skywatch` weather dashboard.
//!
//! This crate defines:
//! - Shared domain models (locations, readings, derived results)
//! - Pure derived-metric calculators (comfort, outdoor rating, moon phase,
//!   weather-code classification, display formatting)
//! - Abstraction over the forecast/air-quality/geocoding backends
//! - Configuration handling (home location)
//!
//! It is used by `skywatch-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod metrics;
pub mod model;
pub mod provider;

pub use config::Config;
pub use metrics::astro::moon_phase;
pub use metrics::codes::classify;
pub use metrics::comfort::{comfort_index, heat_index, wind_chill};
pub use metrics::format::{
    format_humidity, format_pressure, format_temperature, format_wind_speed,
    wind_direction_label,
};
pub use metrics::outdoor::{outdoor_score, recommendations};
pub use model::{
    AirQualityReading, ComfortLevel, ComfortResult, CurrentConditions, DailyForecast, Location,
    MoonPhase, OutdoorRating, PhaseName, RatingBand, WeatherCodeInfo, WeatherReading,
    WeatherSnapshot,
};
pub use provider::{WeatherProvider, default_provider};
