//! Reverse geocoding against the OpenCage API.
//!
//! Best-effort by design: a missing API key short-circuits without a network
//! call, and any provider failure degrades to the empty result. Single
//! attempt, no retry.

use crate::model::geo::GeoLocationDto;

const OPENCAGE_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

/// City fallback chain applied to the provider's address components.
const CITY_KEYS: [&str; 4] = ["city", "town", "village", "municipality"];

/// Service resolving coordinates to a city/country pair.
pub struct GeocodeService<'a> {
    http_client: &'a reqwest::Client,
    api_key: Option<&'a str>,
}

impl<'a> GeocodeService<'a> {
    /// Creates a new GeocodeService instance.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `api_key` - OpenCage API key; `None` disables lookups entirely
    pub fn new(http_client: &'a reqwest::Client, api_key: Option<&'a str>) -> Self {
        Self {
            http_client,
            api_key,
        }
    }

    /// Resolves coordinates to a place.
    ///
    /// # Returns
    /// The resolved city/country, or the empty result when no key is
    /// configured, the provider fails, or nothing usable comes back.
    pub async fn reverse(&self, lat: f64, lng: f64) -> GeoLocationDto {
        let Some(api_key) = self.api_key else {
            return GeoLocationDto::empty();
        };

        match self.fetch_components(lat, lng, api_key).await {
            Ok(components) => GeoLocationDto {
                city: extract_city(&components),
                country: extract_country(&components),
            },
            Err(err) => {
                tracing::warn!("Reverse geocoding failed: {}", err);
                GeoLocationDto::empty()
            }
        }
    }

    async fn fetch_components(
        &self,
        lat: f64,
        lng: f64,
        api_key: &str,
    ) -> Result<serde_json::Value, reqwest::Error> {
        let body: serde_json::Value = self
            .http_client
            .get(OPENCAGE_URL)
            .query(&[
                ("q", format!("{}+{}", lat, lng)),
                ("key", api_key.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(body["results"][0]["components"].clone())
    }
}

/// Picks the city from address components, falling back through
/// town, village, and municipality before giving up with an empty string.
fn extract_city(components: &serde_json::Value) -> String {
    for key in CITY_KEYS {
        if let Some(value) = components.get(key).and_then(|v| v.as_str()) {
            return value.to_string();
        }
    }

    String::new()
}

fn extract_country(components: &serde_json::Value) -> String {
    components
        .get("country")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}
