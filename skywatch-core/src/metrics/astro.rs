//! Lunar phase from the calendar date.

use chrono::{Datelike, NaiveDate};

use crate::model::{MoonPhase, PhaseName};

/// New moon reference epoch (2000-01-06) as a Julian Day.
const NEW_MOON_EPOCH_JD: f64 = 2_451_549.5;

/// Mean length of the synodic month in days.
const SYNODIC_MONTH_DAYS: f64 = 29.53;

/// Julian Day Number for midnight UT of a civil calendar date.
fn julian_day(date: NaiveDate) -> f64 {
    let mut year = i64::from(date.year());
    let mut month = i64::from(date.month());
    let day = f64::from(date.day());

    // January and February count as months 13/14 of the previous year.
    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let century = year.div_euclid(100);
    let gregorian_correction = 2 - century + century.div_euclid(4);

    gregorian_correction as f64
        + day
        + (365.25 * (year + 4716) as f64).floor()
        + (30.6001 * (month + 1) as f64).floor()
        - 1524.5
}

fn phase_name(phase: f64) -> PhaseName {
    // Eight bins of width 0.125, centred so that the cycle wraps back to
    // a new moon above 0.9375.
    if phase < 0.0625 {
        PhaseName::NewMoon
    } else if phase < 0.1875 {
        PhaseName::WaxingCrescent
    } else if phase < 0.3125 {
        PhaseName::FirstQuarter
    } else if phase < 0.4375 {
        PhaseName::WaxingGibbous
    } else if phase < 0.5625 {
        PhaseName::FullMoon
    } else if phase < 0.6875 {
        PhaseName::WaningGibbous
    } else if phase < 0.8125 {
        PhaseName::LastQuarter
    } else if phase < 0.9375 {
        PhaseName::WaningCrescent
    } else {
        PhaseName::NewMoon
    }
}

fn format_time_of_day(minutes_into_day: u32) -> String {
    format!("{:02}:{:02}", minutes_into_day / 60, minutes_into_day % 60)
}

/// Compute the lunar phase for a calendar date.
///
/// The phase fraction and illumination come from a Julian-day count since
/// the 2000-01-06 new moon, divided by the mean synodic month. Moonrise
/// and moonset are a deliberate simplification carried over from the
/// original dashboard: rise is the phase fraction mapped onto the day
/// (phase·24h) and set is twelve hours later, which is not astronomically
/// accurate but is stable and total for any date.
pub fn moon_phase(date: NaiveDate) -> MoonPhase {
    let days_since_epoch = julian_day(date) - NEW_MOON_EPOCH_JD;
    let phase = (days_since_epoch / SYNODIC_MONTH_DAYS).rem_euclid(1.0);

    let illumination =
        (50.0 * (1.0 - (2.0 * std::f64::consts::PI * phase).cos())).round() as u8;

    let rise_minutes = (phase * 24.0 * 60.0) as u32;
    let set_minutes = (rise_minutes + 12 * 60) % (24 * 60);

    MoonPhase {
        phase,
        illumination,
        phase_name: phase_name(phase),
        moonrise: format_time_of_day(rise_minutes),
        moonset: format_time_of_day(set_minutes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn julian_day_reference_values() {
        assert_eq!(julian_day(date(2000, 1, 1)), 2_451_544.5);
        assert_eq!(julian_day(date(2000, 1, 6)), NEW_MOON_EPOCH_JD);
        // February shift into the previous year.
        assert_eq!(julian_day(date(2000, 2, 1)), 2_451_575.5);
    }

    #[test]
    fn epoch_is_a_new_moon() {
        let moon = moon_phase(date(2000, 1, 6));
        assert_eq!(moon.phase, 0.0);
        assert_eq!(moon.illumination, 0);
        assert_eq!(moon.phase_name, PhaseName::NewMoon);
        assert_eq!(moon.moonrise, "00:00");
        assert_eq!(moon.moonset, "12:00");
    }

    #[test]
    fn full_moon_half_a_cycle_later() {
        // 15 days after the epoch new moon.
        let moon = moon_phase(date(2000, 1, 21));
        assert_eq!(moon.phase_name, PhaseName::FullMoon);
        assert_eq!(moon.illumination, 100);
    }

    #[test]
    fn known_new_moon_in_2024() {
        let moon = moon_phase(date(2024, 1, 11));
        assert_eq!(moon.phase_name, PhaseName::NewMoon);
        assert_eq!(moon.illumination, 0);
    }

    #[test]
    fn phase_and_illumination_stay_in_range() {
        let mut day = date(1980, 1, 1);
        for _ in 0..120 {
            let moon = moon_phase(day);
            assert!((0.0..1.0).contains(&moon.phase), "phase {} on {day}", moon.phase);
            assert!(moon.illumination <= 100);
            day = day.succ_opt().expect("next day");
        }
    }

    #[test]
    fn dates_before_the_epoch_are_total() {
        let moon = moon_phase(date(1969, 7, 20));
        assert!((0.0..1.0).contains(&moon.phase));
    }

    #[test]
    fn waning_crescent_wraps_back_to_new_moon() {
        assert_eq!(phase_name(0.95), PhaseName::NewMoon);
        assert_eq!(phase_name(0.9), PhaseName::WaningCrescent);
        assert_eq!(phase_name(0.5), PhaseName::FullMoon);
        assert_eq!(phase_name(0.25), PhaseName::FirstQuarter);
    }

    #[test]
    fn moonset_wraps_past_midnight() {
        // Phase 0.83 puts moonrise at 19:56, so moonset lands at 07:56.
        let moon = moon_phase(date(2000, 1, 1));
        assert_eq!(moon.moonrise, "19:56");
        assert_eq!(moon.moonset, "07:56");
    }
}
