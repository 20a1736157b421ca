//! WMO weather-code classification.

use crate::model::WeatherCodeInfo;

/// The closed set of condition codes the forecast API emits, with their
/// display descriptions and icon categories.
const WEATHER_CODES: &[(i32, &str, &str)] = &[
    (0, "Clear sky", "sun"),
    (1, "Mainly clear", "sun"),
    (2, "Partly cloudy", "cloud-sun"),
    (3, "Overcast", "cloud"),
    (45, "Fog", "cloud-fog"),
    (48, "Depositing rime fog", "cloud-fog"),
    (51, "Light drizzle", "cloud-drizzle"),
    (53, "Moderate drizzle", "cloud-drizzle"),
    (55, "Dense drizzle", "cloud-drizzle"),
    (56, "Light freezing drizzle", "cloud-drizzle"),
    (57, "Dense freezing drizzle", "cloud-drizzle"),
    (61, "Slight rain", "cloud-rain-light"),
    (63, "Moderate rain", "cloud-rain"),
    (65, "Heavy rain", "cloud-rain-heavy"),
    (66, "Light freezing rain", "cloud-rain-light"),
    (67, "Heavy freezing rain", "cloud-rain-heavy"),
    (71, "Slight snow fall", "cloud-snow-light"),
    (73, "Moderate snow fall", "cloud-snow"),
    (75, "Heavy snow fall", "cloud-snow-heavy"),
    (77, "Snow grains", "cloud-snow-light"),
    (80, "Slight rain showers", "shower"),
    (81, "Moderate rain showers", "shower"),
    (82, "Violent rain showers", "shower"),
    (85, "Slight snow showers", "cloud-snow-light"),
    (86, "Heavy snow showers", "cloud-snow-heavy"),
    (95, "Thunderstorm", "thunderstorm"),
    (96, "Thunderstorm with slight hail", "thunderstorm-hail"),
    (99, "Thunderstorm with heavy hail", "thunderstorm-hail"),
];

/// Look up the description and icon for a condition code.
///
/// Never fails: codes outside the table come back as an "Unknown" entry
/// carrying the original code.
pub fn classify(code: i32) -> WeatherCodeInfo {
    WEATHER_CODES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|&(code, description, icon)| WeatherCodeInfo { code, description, icon })
        .unwrap_or(WeatherCodeInfo { code, description: "Unknown", icon: "help-circle" })
}
