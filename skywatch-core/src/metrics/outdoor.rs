//! Outdoor suitability scoring, activity recommendations and the small
//! advisory helpers (UV, visibility, air quality).

use crate::model::{OutdoorRating, RatingBand};

/// Score how suitable conditions are for being outdoors.
///
/// Starts from 100 and applies independent additive penalties per input;
/// the penalties within one input are exclusive (first matching bracket),
/// but the inputs themselves all stack. The result is clamped to 0 and
/// mapped onto a rating band.
pub fn outdoor_score(temp_c: f64, rh_pct: f64, wind_kmh: f64, uv_index: f64, aqi: u32) -> OutdoorRating {
    let mut score: i32 = 100;

    if temp_c < 0.0 {
        score -= 30;
    } else if temp_c < 10.0 {
        score -= 20;
    } else if temp_c > 35.0 {
        score -= 25;
    } else if temp_c > 30.0 {
        score -= 15;
    }

    if rh_pct > 80.0 {
        score -= 15;
    } else if rh_pct < 20.0 {
        score -= 10;
    }

    if wind_kmh > 30.0 {
        score -= 20;
    } else if wind_kmh > 20.0 {
        score -= 10;
    }

    if uv_index > 8.0 {
        score -= 15;
    } else if uv_index > 6.0 {
        score -= 10;
    }

    if aqi > 150 {
        score -= 30;
    } else if aqi > 100 {
        score -= 20;
    } else if aqi > 50 {
        score -= 10;
    }

    let score = score.max(0) as u8;

    let (band, description) = if score >= 85 {
        (RatingBand::Excellent, "Perfect for outdoor activities")
    } else if score >= 70 {
        (RatingBand::Good, "Great for most outdoor activities")
    } else if score >= 55 {
        (RatingBand::Fair, "Okay for light outdoor activities")
    } else if score >= 35 {
        (RatingBand::Poor, "Limited outdoor activities recommended")
    } else {
        (RatingBand::Hazardous, "Stay indoors if possible")
    };

    OutdoorRating { score, band, description: description.to_string() }
}

/// Advisory strings for the current conditions.
///
/// Rule groups run in a fixed order (temperature, humidity, UV, air
/// quality) and are independent, so several can fire at once; the output
/// order mirrors the group order. A calm day yields a single positive
/// message.
pub fn recommendations(temp_c: f64, rh_pct: f64, uv_index: f64, aqi: u32) -> Vec<&'static str> {
    let mut out = Vec::new();

    if temp_c < 5.0 {
        out.push("Dress in warm layers");
        out.push("Limit outdoor exposure");
    } else if temp_c > 30.0 {
        out.push("Stay hydrated");
        out.push("Seek shade during peak hours");
    }

    if rh_pct > 80.0 {
        out.push("High humidity - expect to feel warmer");
        out.push("Not ideal for strenuous outdoor activities");
    } else if rh_pct < 30.0 {
        out.push("Low humidity - use moisturizer");
        out.push("Drink extra water");
    }

    if uv_index > 7.0 {
        out.push("Use SPF 30+ sunscreen");
        out.push("Wear protective clothing");
    }

    if aqi > 100 {
        out.push("Consider indoor activities");
        out.push("Air quality is poor for sensitive individuals");
    }

    if out.is_empty() {
        out.push("Great conditions for outdoor activities!");
    }

    out
}

/// Sun-protection advisory for a UV index reading.
pub fn uv_advice(uv_index: f64) -> &'static str {
    if uv_index <= 2.0 {
        "Low - No protection needed"
    } else if uv_index <= 5.0 {
        "Moderate - Some protection required"
    } else if uv_index <= 7.0 {
        "High - Protection essential"
    } else if uv_index <= 10.0 {
        "Very High - Extra protection needed"
    } else {
        "Extreme - Avoid outdoor activities"
    }
}

/// Qualitative description for a visibility reading in kilometres.
pub fn visibility_description(visibility_km: f64) -> &'static str {
    if visibility_km >= 10.0 {
        "Excellent visibility"
    } else if visibility_km >= 5.0 {
        "Good visibility"
    } else if visibility_km >= 2.0 {
        "Moderate visibility"
    } else if visibility_km >= 1.0 {
        "Poor visibility"
    } else {
        "Very poor visibility"
    }
}

/// Health advisory for a US AQI reading, per the standard EPA bands.
pub fn air_quality_advisory(aqi: u32) -> &'static str {
    match aqi {
        0..=50 => "Good - air quality is satisfactory",
        51..=100 => "Moderate - acceptable for most people",
        101..=150 => "Unhealthy for sensitive groups",
        151..=200 => "Unhealthy - everyone may experience effects",
        201..=300 => "Very unhealthy - health alert",
        _ => "Hazardous - avoid outdoor exertion",
    }
}
