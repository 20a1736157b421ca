use std::fmt::Debug;

use async_trait::async_trait;

use crate::model::{AirQualityReading, Location, WeatherSnapshot};

pub mod geocode;
pub mod openmeteo;

/// Abstraction over the forecast/air-quality backend.
///
/// The dashboard only ever needs these two fetches; keeping them behind a
/// trait lets the CLI run against a stub in tests.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions plus the 7-day outlook for a location.
    async fn fetch_forecast(&self, location: &Location) -> anyhow::Result<WeatherSnapshot>;

    /// Current air-quality observation for a location.
    async fn fetch_air_quality(&self, location: &Location) -> anyhow::Result<AirQualityReading>;
}

/// Construct the default backend (Open-Meteo, no credentials required).
pub fn default_provider() -> Box<dyn WeatherProvider> {
    Box::new(openmeteo::OpenMeteoProvider::new())
}

/// Trim an error body for inclusion in an error message.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
