//! Display formatting for raw readings.
//!
//! All formatters round to the nearest integer (half away from zero) and
//! append a unit suffix. They accept any float, including NaN, without
//! panicking.

/// The 16-point compass rose, clockwise from north.
const COMPASS_LABELS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// "21°C" style; the unit is appended without a space.
pub fn format_temperature(value_c: f64, unit: &str) -> String {
    format!("{}{unit}", value_c.round())
}

/// "15 km/h" style.
pub fn format_wind_speed(value_kmh: f64, unit: &str) -> String {
    format!("{} {unit}", value_kmh.round())
}

pub fn format_humidity(value_pct: f64) -> String {
    format!("{}%", value_pct.round())
}

pub fn format_pressure(value_hpa: f64) -> String {
    format!("{} hPa", value_hpa.round())
}

/// Nearest of the 16 compass labels for a bearing in degrees.
///
/// Bearings outside [0, 360) are normalized first, so negative and
/// wrapped-around values land on the expected sector.
pub fn wind_direction_label(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let index = (normalized / 22.5).round() as usize % 16;
    COMPASS_LABELS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_rounds_and_suffixes() {
        assert_eq!(format_temperature(21.4, "°C"), "21°C");
        assert_eq!(format_temperature(-5.6, "°C"), "-6°C");
        assert_eq!(format_temperature(0.0, "°C"), "0°C");
    }

    #[test]
    fn temperature_half_boundary_rounds_away_from_zero() {
        assert_eq!(format_temperature(20.5, "°C"), "21°C");
        assert_eq!(format_temperature(-20.5, "°C"), "-21°C");
    }

    #[test]
    fn wind_speed_has_a_space_before_the_unit() {
        assert_eq!(format_wind_speed(14.7, "km/h"), "15 km/h");
    }

    #[test]
    fn humidity_and_pressure_suffixes() {
        assert_eq!(format_humidity(64.5), "65%");
        assert_eq!(format_pressure(1013.2), "1013 hPa");
    }

    #[test]
    fn nan_does_not_panic() {
        assert_eq!(format_temperature(f64::NAN, "°C"), "NaN°C");
        assert_eq!(wind_direction_label(f64::NAN), "N");
    }

    #[test]
    fn cardinal_directions() {
        assert_eq!(wind_direction_label(0.0), "N");
        assert_eq!(wind_direction_label(90.0), "E");
        assert_eq!(wind_direction_label(180.0), "S");
        assert_eq!(wind_direction_label(270.0), "W");
    }

    #[test]
    fn wraparound_near_north() {
        assert_eq!(wind_direction_label(359.0), "N");
        assert_eq!(wind_direction_label(360.0), "N");
        assert_eq!(wind_direction_label(345.0), "NNW");
    }

    #[test]
    fn negative_bearings_are_normalized() {
        assert_eq!(wind_direction_label(-90.0), "W");
        assert_eq!(wind_direction_label(-720.0), "N");
    }

    #[test]
    fn intercardinal_boundaries() {
        assert_eq!(wind_direction_label(22.5), "NNE");
        assert_eq!(wind_direction_label(11.0), "N");
        assert_eq!(wind_direction_label(11.5), "NNE");
    }
}
