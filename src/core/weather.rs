//! Current conditions from the OpenWeather API.

use crate::core::geo::Coordinates;
use crate::core::units;
use crate::error::{Result, StrikerError};
use log::debug;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const OPEN_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Entry of `airport-data.json`, keyed by ICAO code.
#[derive(Debug, Clone, Deserialize)]
pub struct Airport {
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherReport {
    pub main: MainReadings,
    #[serde(default)]
    pub wind: Wind,
    pub rain: Option<Precipitation>,
    pub snow: Option<Precipitation>,
    /// Meters
    pub visibility: Option<f64>,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    /// Celsius (metric units)
    pub temp: f64,
    pub humidity: f64,
    /// Hectopascals
    pub pressure: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wind {
    /// Meters per second
    #[serde(default)]
    pub speed: f64,
    pub deg: Option<f64>,
}

/// Millimeters over the last one or three hours
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Precipitation {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h")]
    pub three_hours: Option<f64>,
}

impl Precipitation {
    pub fn millimeters(&self) -> f64 {
        self.one_hour.or(self.three_hours).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub description: String,
}

/// Blocking OpenWeather client using metric units.
pub struct WeatherClient {
    client: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new<S: Into<String>>(api_key: S) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("striker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: OPEN_WEATHER_URL.to_string(),
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
                ("lat", at.latitude.to_string()),
                ("lon", at.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ],
        )
        .map_err(|e| StrikerError::config(format!("Invalid weather URL {}: {}", self.base_url, e)))
    }

    pub fn current(&self, at: Coordinates) -> Result<WeatherReport> {
        let url = self.request_url(at)?;
        debug!("Fetching weather for {}, {}", at.latitude, at.longitude);

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(StrikerError::api(
                status.as_u16(),
                format!("Failed to fetch weather: {}", body.trim()),
            ));
        }

        Ok(response.json()?)
    }
}

/// Display-ready values derived from a [`WeatherReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    pub temp_c: f64,
    pub temp_f: f64,
    pub dew_c: f64,
    pub dew_f: f64,
    pub humidity: f64,
    pub pressure_inhg: f64,
    pub wind_mph: f64,
    pub wind_deg: Option<f64>,
    pub visibility_miles: Option<f64>,
    pub precipitation: String,
    pub sky: String,
}

impl Conditions {
    pub fn from_report(report: &WeatherReport) -> Self {
        let temp_c = report.main.temp;
        let humidity = report.main.humidity;
        let dew_c = units::dew_point_celsius(temp_c, humidity);

        // Snow wins when both are reported
        let precipitation = match (&report.snow, &report.rain) {
            (Some(snow), _) => format!(
                "{:.1} inches of snow",
                units::millimeters_to_inches(snow.millimeters())
            ),
            (None, Some(rain)) => format!(
                "{:.1} inches of rain",
                units::millimeters_to_inches(rain.millimeters())
            ),
            (None, None) => "dry".to_string(),
        };

        Self {
            temp_c,
            temp_f: units::celsius_to_fahrenheit(temp_c),
            dew_c,
            dew_f: units::celsius_to_fahrenheit(dew_c),
            humidity,
            pressure_inhg: units::hectopascals_to_inches_of_mercury(report.main.pressure),
            wind_mph: units::meters_per_second_to_miles_per_hour(report.wind.speed),
            wind_deg: report.wind.deg,
            visibility_miles: report.visibility.map(units::meters_to_miles),
            precipitation,
            sky: report
                .weather
                .first()
                .map(|c| c.description.clone())
                .unwrap_or_default(),
        }
    }

    pub fn temperature_color(&self) -> &'static str {
        temperature_color(self.temp_f)
    }

    pub fn pressure_color(&self) -> &'static str {
        pressure_color(self.pressure_inhg)
    }
}

/// Conky colour directive for an air temperature in °F
pub fn temperature_color(temp_f: f64) -> &'static str {
    if temp_f < 35.0 {
        "color2"
    } else if temp_f < 55.0 {
        "color yellow"
    } else if temp_f > 90.0 {
        "color violet"
    } else if temp_f > 80.0 {
        "color yellow"
    } else {
        "color green"
    }
}

/// Low pressure in the secondary colour, high in green
pub fn pressure_color(pressure_inhg: f64) -> &'static str {
    if pressure_inhg < 29.80 {
        "color2"
    } else if pressure_inhg > 30.20 {
        "color green"
    } else {
        "color yellow"
    }
}
