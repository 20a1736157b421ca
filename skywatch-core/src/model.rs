use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::metrics::{comfort, outdoor};

/// A geographic point, optionally labelled with a place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Location {
    /// "City, Country" when both are known, otherwise raw coordinates.
    pub fn display_name(&self) -> String {
        match (&self.city, &self.country) {
            (Some(city), Some(country)) => format!("{city}, {country}"),
            (Some(city), None) => city.clone(),
            _ => format!("{:.4}, {:.4}", self.latitude, self.longitude),
        }
    }
}

/// The raw readings the derived-metric calculators consume.
///
/// One of these is built per refresh from the current conditions and the
/// air-quality observation; the calculators never see anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub relative_humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub uv_index: f64,
    pub aqi: u32,
}

impl WeatherReading {
    pub fn from_observations(current: &CurrentConditions, air: &AirQualityReading) -> Self {
        Self {
            temperature_c: current.temperature_c,
            relative_humidity_pct: current.relative_humidity_pct,
            wind_speed_kmh: current.wind_speed_kmh,
            uv_index: current.uv_index,
            aqi: air.aqi,
        }
    }

    pub fn comfort(&self) -> ComfortResult {
        comfort::comfort_index(self.temperature_c, self.relative_humidity_pct, self.wind_speed_kmh)
    }

    pub fn outdoor_rating(&self) -> OutdoorRating {
        outdoor::outdoor_score(
            self.temperature_c,
            self.relative_humidity_pct,
            self.wind_speed_kmh,
            self.uv_index,
            self.aqi,
        )
    }

    pub fn recommendations(&self) -> Vec<&'static str> {
        outdoor::recommendations(
            self.temperature_c,
            self.relative_humidity_pct,
            self.uv_index,
            self.aqi,
        )
    }
}

/// Categorical comfort level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComfortLevel {
    Comfortable,
    Humid,
    Muggy,
    Dry,
    Cold,
    Hot,
}

impl ComfortLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComfortLevel::Comfortable => "comfortable",
            ComfortLevel::Humid => "humid",
            ComfortLevel::Muggy => "muggy",
            ComfortLevel::Dry => "dry",
            ComfortLevel::Cold => "cold",
            ComfortLevel::Hot => "hot",
        }
    }
}

impl std::fmt::Display for ComfortLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComfortResult {
    pub level: ComfortLevel,
    pub description: String,
}

/// Discrete outdoor-activity rating band, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
    Excellent,
    Good,
    Fair,
    Poor,
    Hazardous,
}

impl RatingBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingBand::Excellent => "excellent",
            RatingBand::Good => "good",
            RatingBand::Fair => "fair",
            RatingBand::Poor => "poor",
            RatingBand::Hazardous => "hazardous",
        }
    }
}

impl std::fmt::Display for RatingBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutdoorRating {
    /// 0..=100, higher is better.
    pub score: u8,
    pub band: RatingBand,
    pub description: String,
}

/// One of the eight named lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseName::NewMoon => "New Moon",
            PhaseName::WaxingCrescent => "Waxing Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::FullMoon => "Full Moon",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::WaningCrescent => "Waning Crescent",
        }
    }
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonPhase {
    /// Fraction of the synodic cycle, 0 = new moon, 0.5 = full moon. Always in [0, 1).
    pub phase: f64,
    /// Illuminated fraction of the disc as a rounded percentage.
    pub illumination: u8,
    pub phase_name: PhaseName,
    /// Simplified time-of-day strings ("HH:MM"); see `metrics::astro` for caveats.
    pub moonrise: String,
    pub moonset: String,
}

/// Description and icon category for a WMO weather condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherCodeInfo {
    pub code: i32,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Current observation block as mapped from the forecast provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub apparent_temperature_c: f64,
    pub relative_humidity_pct: f64,
    pub precipitation_mm: f64,
    pub weather_code: i32,
    pub cloud_cover_pct: f64,
    pub pressure_hpa: f64,
    pub wind_speed_kmh: f64,
    pub wind_direction_deg: f64,
    pub wind_gusts_kmh: f64,
    pub uv_index: f64,
}

/// One day of the 7-day outlook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: i32,
    pub temperature_max_c: f64,
    pub temperature_min_c: f64,
    pub precipitation_sum_mm: f64,
    pub precipitation_probability_pct: Option<f64>,
    pub wind_speed_max_kmh: f64,
    pub sunrise: String,
    pub sunset: String,
}

/// Everything one forecast fetch yields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecast>,
}

/// Air-quality observation (US AQI plus raw pollutant concentrations in µg/m³).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReading {
    pub aqi: u32,
    pub pm2_5: f64,
    pub pm10: f64,
    pub carbon_monoxide: f64,
    pub nitrogen_dioxide: f64,
    pub sulphur_dioxide: f64,
    pub ozone: f64,
}
