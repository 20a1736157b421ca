use reqwest::Client;
use serde::Deserialize;

use crate::model::Location;

const REVERSE_GEOCODE_URL: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";

/// Fallback when no location is configured and none was supplied:
/// New York City.
pub fn default_location() -> Location {
    Location {
        latitude: 40.7128,
        longitude: -74.006,
        city: Some("New York".to_string()),
        country: Some("United States".to_string()),
    }
}

/// Reverse geocoder for labelling coordinates with a city and country.
#[derive(Debug, Clone)]
pub struct Geocoder {
    http: Client,
}

impl Default for Geocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct ReverseGeocodeResponse {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    locality: Option<String>,
    #[serde(rename = "countryName", default)]
    country_name: Option<String>,
}

impl Geocoder {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// Label coordinates with a place name.
    ///
    /// Infallible: any network or parse failure degrades to an unlabelled
    /// coordinate-only location, since a missing city name should never
    /// block a forecast.
    pub async fn resolve(&self, latitude: f64, longitude: f64) -> Location {
        let (city, country) = match self.lookup(latitude, longitude).await {
            Ok(parsed) => {
                let city = parsed.city.filter(|c| !c.is_empty()).or(parsed.locality);
                (city, parsed.country_name)
            }
            Err(_) => (None, None),
        };

        Location { latitude, longitude, city, country }
    }

    async fn lookup(&self, latitude: f64, longitude: f64) -> anyhow::Result<ReverseGeocodeResponse> {
        let parsed = self
            .http
            .get(REVERSE_GEOCODE_URL)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("localityLanguage", "en".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<ReverseGeocodeResponse>()
            .await?;

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_location_is_new_york() {
        let loc = default_location();
        assert_eq!(loc.latitude, 40.7128);
        assert_eq!(loc.longitude, -74.006);
        assert_eq!(loc.display_name(), "New York, United States");
    }

    #[test]
    fn geocode_response_prefers_city_over_locality() {
        let body = r#"{"city": "Berlin", "locality": "Mitte", "countryName": "Germany"}"#;
        let parsed: ReverseGeocodeResponse = serde_json::from_str(body).expect("should parse");
        let city = parsed.city.filter(|c| !c.is_empty()).or(parsed.locality);
        assert_eq!(city.as_deref(), Some("Berlin"));
        assert_eq!(parsed.country_name.as_deref(), Some("Germany"));
    }

    #[test]
    fn empty_city_falls_back_to_locality() {
        let body = r#"{"city": "", "locality": "Smallville", "countryName": "United States"}"#;
        let parsed: ReverseGeocodeResponse = serde_json::from_str(body).expect("should parse");
        let city = parsed.city.filter(|c| !c.is_empty()).or(parsed.locality);
        assert_eq!(city.as_deref(), Some("Smallville"));
    }
}
