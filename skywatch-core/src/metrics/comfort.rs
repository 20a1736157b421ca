//! Thermal comfort: heat index, wind chill and the categorical comfort level.

use crate::model::{ComfortLevel, ComfortResult};

/// Apparent temperature accounting for humidity (Rothfusz regression).
///
/// Below 27 °C the regression is not meaningful and the input temperature
/// is returned unchanged.
pub fn heat_index(temp_c: f64, rh_pct: f64) -> f64 {
    let t = temp_c;
    let rh = rh_pct;

    if t < 27.0 {
        return t;
    }

    const C1: f64 = -42.379;
    const C2: f64 = 2.04901523;
    const C3: f64 = 10.14333127;
    const C4: f64 = -0.22475541;
    const C5: f64 = -0.00683783;
    const C6: f64 = -0.05481717;
    const C7: f64 = 0.00122874;
    const C8: f64 = 0.00085282;
    const C9: f64 = -0.00000199;

    C1 + C2 * t
        + C3 * rh
        + C4 * t * rh
        + C5 * t * t
        + C6 * rh * rh
        + C7 * t * t * rh
        + C8 * t * rh * rh
        + C9 * t * t * rh * rh
}

/// Apparent temperature accounting for wind at low temperatures.
///
/// Valid only below 10 °C with wind of at least 4.8 km/h; outside that
/// region the input temperature is returned unchanged.
pub fn wind_chill(temp_c: f64, wind_kmh: f64) -> f64 {
    if temp_c > 10.0 || wind_kmh < 4.8 {
        return temp_c;
    }

    let t = temp_c;
    let v = wind_kmh.powf(0.16);

    13.12 + 0.6215 * t - 11.37 * v + 0.3965 * t * v
}

/// Classify the current conditions into a comfort level.
///
/// This is an ordered cascade and the order is load-bearing: the ranges
/// overlap, so e.g. 31 °C at 20% humidity is "hot", not "dry", because the
/// temperature branch is checked first.
pub fn comfort_index(temp_c: f64, rh_pct: f64, wind_kmh: f64) -> ComfortResult {
    if temp_c < 10.0 {
        let chill = wind_chill(temp_c, wind_kmh).round();
        return ComfortResult {
            level: ComfortLevel::Cold,
            description: format!("Feels cold at {chill}°C due to wind chill"),
        };
    }

    if temp_c > 30.0 {
        let apparent = heat_index(temp_c, rh_pct).round();
        if rh_pct > 70.0 {
            return ComfortResult {
                level: ComfortLevel::Muggy,
                description: format!("Muggy and uncomfortable, feels like {apparent}°C"),
            };
        }
        if rh_pct > 50.0 {
            return ComfortResult {
                level: ComfortLevel::Humid,
                description: format!("Hot and humid, feels like {apparent}°C"),
            };
        }
        return ComfortResult {
            level: ComfortLevel::Hot,
            description: "Hot but dry conditions".to_string(),
        };
    }

    if rh_pct < 30.0 {
        return ComfortResult {
            level: ComfortLevel::Dry,
            description: format!("Dry conditions, low humidity at {rh_pct}%"),
        };
    }

    ComfortResult {
        level: ComfortLevel::Comfortable,
        description: "Pleasant and comfortable conditions".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_index_is_identity_below_threshold() {
        assert_eq!(heat_index(26.9, 95.0), 26.9);
        assert_eq!(heat_index(-5.0, 10.0), -5.0);
        assert_eq!(heat_index(0.0, 50.0), 0.0);
    }

    #[test]
    fn heat_index_regression_above_threshold() {
        // Reference value for the 9-term regression at 32 °C / 80% RH.
        let hi = heat_index(32.0, 80.0);
        assert!((hi - 163.724_566).abs() < 1e-4, "got {hi}");
        assert!(heat_index(30.0, 70.0) > 30.0);
    }

    #[test]
    fn wind_chill_is_identity_outside_domain() {
        // Too warm.
        assert_eq!(wind_chill(10.1, 30.0), 10.1);
        // Too calm.
        assert_eq!(wind_chill(5.0, 4.7), 5.0);
        assert_eq!(wind_chill(15.0, 0.0), 15.0);
    }

    #[test]
    fn wind_chill_formula_within_domain() {
        let wc = wind_chill(5.0, 20.0);
        assert!((wc - 1.066_957).abs() < 1e-4, "got {wc}");

        let wc = wind_chill(0.0, 30.0);
        assert!((wc - (-6.472_952)).abs() < 1e-4, "got {wc}");

        // Chill always below the actual temperature in-domain.
        assert!(wind_chill(-10.0, 25.0) < -10.0);
    }

    #[test]
    fn comfort_cascade_scenarios() {
        assert_eq!(comfort_index(5.0, 50.0, 10.0).level, ComfortLevel::Cold);
        assert_eq!(comfort_index(32.0, 80.0, 5.0).level, ComfortLevel::Muggy);
        assert_eq!(comfort_index(32.0, 60.0, 5.0).level, ComfortLevel::Humid);
        assert_eq!(comfort_index(32.0, 20.0, 5.0).level, ComfortLevel::Hot);
        assert_eq!(comfort_index(20.0, 20.0, 5.0).level, ComfortLevel::Dry);
        assert_eq!(comfort_index(20.0, 50.0, 5.0).level, ComfortLevel::Comfortable);
    }

    #[test]
    fn temperature_branch_wins_over_dry_branch() {
        // 31 °C at 20% humidity is in both the "hot" and "dry" ranges; the
        // cascade checks temperature first.
        assert_eq!(comfort_index(31.0, 20.0, 5.0).level, ComfortLevel::Hot);
    }

    #[test]
    fn cold_description_carries_the_wind_chill() {
        let result = comfort_index(5.0, 50.0, 20.0);
        assert_eq!(result.level, ComfortLevel::Cold);
        // wind_chill(5, 20) rounds to 1.
        assert_eq!(result.description, "Feels cold at 1°C due to wind chill");
    }

    #[test]
    fn dry_description_interpolates_raw_humidity() {
        let result = comfort_index(20.0, 20.0, 5.0);
        assert_eq!(result.description, "Dry conditions, low humidity at 20%");
    }
}
