use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::model::{
    AirQualityReading, CurrentConditions, DailyForecast, Location, WeatherSnapshot,
};

use super::{WeatherProvider, truncate_body};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
                              precipitation,weather_code,cloud_cover,pressure_msl,\
                              wind_speed_10m,wind_direction_10m,wind_gusts_10m,uv_index";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,\
                            precipitation_sum,precipitation_probability_max,\
                            wind_speed_10m_max,sunrise,sunset";
const AIR_QUALITY_FIELDS: &str = "us_aqi,pm2_5,pm10,carbon_monoxide,nitrogen_dioxide,\
                                  sulphur_dioxide,ozone";

/// Open-Meteo backend. Both endpoints are keyless public APIs.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn fetch_forecast(&self, location: &Location) -> Result<WeatherSnapshot> {
        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", "7".to_string()),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo (forecast)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OmForecastResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo forecast JSON")?;

        snapshot_from_response(parsed)
    }

    async fn fetch_air_quality(&self, location: &Location) -> Result<AirQualityReading> {
        let res = self
            .http
            .get(AIR_QUALITY_URL)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", AIR_QUALITY_FIELDS.to_string()),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo (air quality)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo air-quality response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo air-quality request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OmAirQualityResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo air-quality JSON")?;

        Ok(air_quality_from_response(parsed))
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    apparent_temperature: f64,
    precipitation: f64,
    weather_code: i32,
    cloud_cover: f64,
    pressure_msl: f64,
    wind_speed_10m: f64,
    wind_direction_10m: f64,
    wind_gusts_10m: f64,
    // Null overnight at some stations.
    #[serde(default)]
    uv_index: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<String>,
    weather_code: Vec<i32>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    precipitation_sum: Vec<f64>,
    precipitation_probability_max: Vec<Option<f64>>,
    wind_speed_10m_max: Vec<f64>,
    sunrise: Vec<String>,
    sunset: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current: OmCurrent,
    daily: OmDaily,
}

#[derive(Debug, Deserialize)]
struct OmAirQualityCurrent {
    #[serde(default)]
    us_aqi: Option<f64>,
    #[serde(default)]
    pm2_5: f64,
    #[serde(default)]
    pm10: f64,
    #[serde(default)]
    carbon_monoxide: f64,
    #[serde(default)]
    nitrogen_dioxide: f64,
    #[serde(default)]
    sulphur_dioxide: f64,
    #[serde(default)]
    ozone: f64,
}

#[derive(Debug, Deserialize)]
struct OmAirQualityResponse {
    current: OmAirQualityCurrent,
}

fn snapshot_from_response(parsed: OmForecastResponse) -> Result<WeatherSnapshot> {
    let current = CurrentConditions {
        temperature_c: parsed.current.temperature_2m,
        apparent_temperature_c: parsed.current.apparent_temperature,
        relative_humidity_pct: parsed.current.relative_humidity_2m,
        precipitation_mm: parsed.current.precipitation,
        weather_code: parsed.current.weather_code,
        cloud_cover_pct: parsed.current.cloud_cover,
        pressure_hpa: parsed.current.pressure_msl,
        wind_speed_kmh: parsed.current.wind_speed_10m,
        wind_direction_deg: parsed.current.wind_direction_10m,
        wind_gusts_kmh: parsed.current.wind_gusts_10m,
        uv_index: parsed.current.uv_index.unwrap_or(0.0),
    };

    let d = parsed.daily;
    let days = d.time.len();
    if [
        d.weather_code.len(),
        d.temperature_2m_max.len(),
        d.temperature_2m_min.len(),
        d.precipitation_sum.len(),
        d.precipitation_probability_max.len(),
        d.wind_speed_10m_max.len(),
        d.sunrise.len(),
        d.sunset.len(),
    ]
    .iter()
    .any(|&len| len != days)
    {
        return Err(anyhow!("Open-Meteo daily arrays have mismatched lengths"));
    }

    let mut daily = Vec::with_capacity(days);
    for i in 0..days {
        let date = NaiveDate::parse_from_str(&d.time[i], "%Y-%m-%d")
            .with_context(|| format!("Failed to parse forecast date '{}'", d.time[i]))?;

        daily.push(DailyForecast {
            date,
            weather_code: d.weather_code[i],
            temperature_max_c: d.temperature_2m_max[i],
            temperature_min_c: d.temperature_2m_min[i],
            precipitation_sum_mm: d.precipitation_sum[i],
            precipitation_probability_pct: d.precipitation_probability_max[i],
            wind_speed_max_kmh: d.wind_speed_10m_max[i],
            sunrise: d.sunrise[i].clone(),
            sunset: d.sunset[i].clone(),
        });
    }

    Ok(WeatherSnapshot { current, daily })
}

fn air_quality_from_response(parsed: OmAirQualityResponse) -> AirQualityReading {
    let c = parsed.current;
    AirQualityReading {
        aqi: c.us_aqi.unwrap_or(0.0).max(0.0) as u32,
        pm2_5: c.pm2_5,
        pm10: c.pm10,
        carbon_monoxide: c.carbon_monoxide,
        nitrogen_dioxide: c.nitrogen_dioxide,
        sulphur_dioxide: c.sulphur_dioxide,
        ozone: c.ozone,
    }
}
