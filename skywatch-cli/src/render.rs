//! Plain-text rendering of the dashboard sections.

use chrono::NaiveDate;

use skywatch_core::metrics::outdoor::{air_quality_advisory, uv_advice};
use skywatch_core::{
    AirQualityReading, CurrentConditions, DailyForecast, Location, MoonPhase, WeatherReading,
    WeatherSnapshot, classify, format_humidity, format_pressure, format_temperature,
    format_wind_speed, wind_direction_label,
};

/// Assemble the full dashboard.
pub fn dashboard(
    location: &Location,
    snapshot: &WeatherSnapshot,
    air: &AirQualityReading,
    reading: &WeatherReading,
    moon: &MoonPhase,
) -> String {
    let mut out = String::new();

    out.push_str(&current_section(location, &snapshot.current));
    out.push('\n');
    out.push_str(&comfort_section(reading));
    out.push('\n');
    out.push_str(&air_quality_section(air));
    out.push('\n');
    out.push_str(&moon_phase_block(moon));
    out.push('\n');
    out.push_str(&weekly_section(&snapshot.daily));

    out
}

fn current_section(location: &Location, current: &CurrentConditions) -> String {
    let info = classify(current.weather_code);
    let mut out = format!("Current weather for {}\n\n", location.display_name());

    out.push_str(&format!(
        "  {}  (feels like {})\n",
        format_temperature(current.temperature_c, "°C"),
        format_temperature(current.apparent_temperature_c, "°C"),
    ));
    out.push_str(&format!("  Conditions: {}\n", info.description));
    out.push_str(&format!("  Humidity: {}\n", format_humidity(current.relative_humidity_pct)));
    out.push_str(&format!("  Pressure: {}\n", format_pressure(current.pressure_hpa)));
    out.push_str(&format!(
        "  Wind: {} {} (gusts {})\n",
        format_wind_speed(current.wind_speed_kmh, "km/h"),
        wind_direction_label(current.wind_direction_deg),
        format_wind_speed(current.wind_gusts_kmh, "km/h"),
    ));
    out.push_str(&format!("  Cloud cover: {}\n", format_humidity(current.cloud_cover_pct)));
    out.push_str(&format!(
        "  UV index: {} ({})\n",
        current.uv_index,
        uv_advice(current.uv_index)
    ));

    out
}

fn comfort_section(reading: &WeatherReading) -> String {
    let comfort = reading.comfort();
    let rating = reading.outdoor_rating();

    let mut out = String::from("Health & comfort\n\n");
    out.push_str(&format!("  Comfort: {} - {}\n", comfort.level, comfort.description));
    out.push_str(&format!(
        "  Outdoor rating: {} ({}/100) - {}\n",
        rating.band, rating.score, rating.description
    ));

    out.push_str("  Recommendations:\n");
    for recommendation in reading.recommendations() {
        out.push_str(&format!("    - {recommendation}\n"));
    }

    out
}

fn air_quality_section(air: &AirQualityReading) -> String {
    let mut out = String::from("Air quality\n\n");
    out.push_str(&format!("  US AQI: {} ({})\n", air.aqi, air_quality_advisory(air.aqi)));
    out.push_str(&format!(
        "  PM2.5: {} µg/m³  PM10: {} µg/m³  O₃: {} µg/m³  NO₂: {} µg/m³\n",
        air.pm2_5, air.pm10, air.ozone, air.nitrogen_dioxide
    ));
    out
}

/// Moon block with a date header, also used by the `moon` subcommand.
pub fn moon_section(date: NaiveDate, moon: &MoonPhase) -> String {
    format!("Moon phase for {date}\n\n{}", moon_phase_block(moon))
}

fn moon_phase_block(moon: &MoonPhase) -> String {
    let mut out = String::from("Moon\n\n");
    out.push_str(&format!(
        "  {} ({}% illuminated)\n",
        moon.phase_name, moon.illumination
    ));
    out.push_str(&format!("  Moonrise: {}  Moonset: {}\n", moon.moonrise, moon.moonset));
    out
}

fn weekly_section(daily: &[DailyForecast]) -> String {
    let mut out = String::from("7-day outlook\n\n");

    for day in daily {
        let info = classify(day.weather_code);
        let precipitation = match day.precipitation_probability_pct {
            Some(pct) => format!("{} ({} chance)", day.precipitation_sum_mm, format_humidity(pct)),
            None => day.precipitation_sum_mm.to_string(),
        };

        out.push_str(&format!(
            "  {}  {} / {}  {}  precip {} mm  wind up to {}\n",
            day.date.format("%a %b %d"),
            format_temperature(day.temperature_max_c, "°C"),
            format_temperature(day.temperature_min_c, "°C"),
            info.description,
            precipitation,
            format_wind_speed(day.wind_speed_max_kmh, "km/h"),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use skywatch_core::moon_phase;

    fn sample_location() -> Location {
        Location {
            latitude: 40.7128,
            longitude: -74.006,
            city: Some("New York".into()),
            country: Some("United States".into()),
        }
    }

    fn sample_snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            current: CurrentConditions {
                temperature_c: 24.3,
                apparent_temperature_c: 25.1,
                relative_humidity_pct: 58.0,
                precipitation_mm: 0.0,
                weather_code: 2,
                cloud_cover_pct: 40.0,
                pressure_hpa: 1015.2,
                wind_speed_kmh: 14.8,
                wind_direction_deg: 215.0,
                wind_gusts_kmh: 28.1,
                uv_index: 6.2,
            },
            daily: vec![DailyForecast {
                date: NaiveDate::from_ymd_opt(2024, 6, 2).expect("date"),
                weather_code: 61,
                temperature_max_c: 22.4,
                temperature_min_c: 15.8,
                precipitation_sum_mm: 4.2,
                precipitation_probability_pct: Some(60.0),
                wind_speed_max_kmh: 25.3,
                sunrise: "2024-06-02T05:26".into(),
                sunset: "2024-06-02T20:23".into(),
            }],
        }
    }

    fn sample_air() -> AirQualityReading {
        AirQualityReading {
            aqi: 62,
            pm2_5: 11.4,
            pm10: 19.0,
            carbon_monoxide: 233.0,
            nitrogen_dioxide: 14.9,
            sulphur_dioxide: 2.1,
            ozone: 71.0,
        }
    }

    #[test]
    fn dashboard_contains_all_sections() {
        let snapshot = sample_snapshot();
        let air = sample_air();
        let reading = WeatherReading::from_observations(&snapshot.current, &air);
        let moon = moon_phase(NaiveDate::from_ymd_opt(2024, 1, 11).expect("date"));

        let text = dashboard(&sample_location(), &snapshot, &air, &reading, &moon);

        assert!(text.contains("Current weather for New York, United States"));
        assert!(text.contains("24°C"));
        assert!(text.contains("Partly cloudy"));
        assert!(text.contains("15 km/h SW"));
        assert!(text.contains("Health & comfort"));
        assert!(text.contains("Pleasant and comfortable conditions"));
        assert!(text.contains("US AQI: 62 (Moderate - acceptable for most people)"));
        assert!(text.contains("New Moon (0% illuminated)"));
        assert!(text.contains("7-day outlook"));
        assert!(text.contains("Moderate rain"));
        assert!(text.contains("(60% chance)"));
    }

    #[test]
    fn moon_section_includes_the_date() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 21).expect("date");
        let text = moon_section(date, &moon_phase(date));

        assert!(text.contains("Moon phase for 2000-01-21"));
        assert!(text.contains("Full Moon (100% illuminated)"));
    }
}
