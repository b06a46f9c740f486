//! Sun and moon times, from ipgeolocation.io or the local solar-system cache.

use crate::core::geo::Coordinates;
use crate::core::sky::SolarSystemDay;
use crate::error::{Result, StrikerError};
use log::debug;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const IP_GEOLOCATION_URL: &str = "https://api.ipgeolocation.io/astronomy";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Sun and moon events for one day. Times are `HH:MM` strings as the API
/// returns them; absent events (e.g. no moonset today) are `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AstronomyReport {
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub day_length: Option<String>,
    pub moonrise: Option<String>,
    pub moonset: Option<String>,
    pub moon_phase: Option<String>,
    #[serde(
        alias = "moon_illumination_percentage",
        deserialize_with = "string_or_number"
    )]
    pub moon_illumination: Option<String>,
}

/// Some API revisions send the illumination as a number, others as a string
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

impl From<SolarSystemDay> for AstronomyReport {
    fn from(day: SolarSystemDay) -> Self {
        Self {
            sunrise: day.sunrise,
            sunset: day.sunset,
            day_length: day.day_length,
            moonrise: day.moonrise,
            moonset: day.moonset,
            moon_phase: day.moon_phase,
            moon_illumination: day
                .moon_illumination_percent
                .map(|pct| format!("{:.1}", pct)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

pub struct AstronomyClient {
    client: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl AstronomyClient {
    pub fn new<S: Into<String>>(api_key: S) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("striker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: IP_GEOLOCATION_URL.to_string(),
        })
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn request_url(&self, at: Coordinates) -> Result<Url> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("apiKey", self.api_key.clone()),
                ("lat", at.latitude.to_string()),
                ("long", at.longitude.to_string()),
            ],
        )
        .map_err(|e| {
            StrikerError::config(format!("Invalid astronomy URL {}: {}", self.base_url, e))
        })
    }

    pub fn today(&self, at: Coordinates) -> Result<AstronomyReport> {
        let url = self.request_url(at)?;
        debug!("Fetching astronomy data for {}, {}", at.latitude, at.longitude);

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(StrikerError::api(status.as_u16(), api_error_message(&body)));
        }

        Ok(response.json()?)
    }
}

/// The API reports failures as `{"message": "..."}`
pub fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            message: Some(message),
        }) => message,
        Ok(_) => "Unknown error".to_string(),
        Err(_) => "Invalid JSON response".to_string(),
    }
}
