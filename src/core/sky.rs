//! Records of the cached sky catalogs.
//!
//! The catalogs are produced offline (SIMBAD, the NASA exoplanet archive and an
//! ephemeris); positions are precomputed per calendar day as `YYYY-MM-DD` keys.

use crate::error::Result;
use chrono::NaiveDate;
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Horizontal coordinates for the observer on a given day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkyPosition {
    pub azimuth_deg: f64,
    pub altitude_deg: f64,
}

impl SkyPosition {
    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg > 0.0
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StarRecord {
    pub constellation: Option<String>,
    pub meaning: Option<String>,
    pub spectral_type: Option<String>,
    pub luminosity: Option<f64>,
    pub mass_msun: Option<f64>,
    #[serde(alias = "visual_mag")]
    pub app_mag: Option<f64>,
    pub distance_ly: Option<f64>,
    pub daily_positions: HashMap<String, SkyPosition>,
}

impl StarRecord {
    pub fn position_on(&self, date: NaiveDate) -> Option<SkyPosition> {
        self.daily_positions.get(&date_key(date)).copied()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Observation {
    pub date: String,
    pub azimuth_deg: f64,
    pub altitude_deg: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExoplanetRecord {
    pub host_star: Option<String>,
    pub mass_earth: Option<f64>,
    pub world_type: Option<String>,
    pub star_distance_ly: Option<f64>,
    pub star_spectral_type: Option<String>,
    pub observations: Vec<Observation>,
}

impl ExoplanetRecord {
    pub fn position_on(&self, date: NaiveDate) -> Option<SkyPosition> {
        let key = date_key(date);
        self.observations
            .iter()
            .find(|o| o.date == key)
            .map(|o| SkyPosition {
                azimuth_deg: o.azimuth_deg,
                altitude_deg: o.altitude_deg,
            })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanetRecord {
    pub mass_earths: Option<f64>,
    #[serde(rename = "type")]
    pub planet_type: Option<String>,
    pub distance_au: Option<f64>,
    pub magnitude: Option<f64>,
    pub avg_temp_k: Option<f64>,
    pub radius_km: Option<f64>,
}

/// One day of the solar-system cache: sun and moon events plus planet positions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SolarSystemDay {
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub moonrise: Option<String>,
    pub moonset: Option<String>,
    pub day_length: Option<String>,
    pub moon_phase: Option<String>,
    pub moon_emoji: Option<String>,
    pub moon_illumination_percent: Option<f64>,
    pub sun_declination: Option<f64>,
    pub planets: HashMap<String, SkyPosition>,
}

impl SolarSystemDay {
    /// Position by display name; outer planets are stored as barycenters
    pub fn planet_position(&self, name: &str) -> Option<SkyPosition> {
        let key = name.to_lowercase();
        self.planets
            .get(&key)
            .or_else(|| self.planets.get(&format!("{} barycenter", key)))
            .copied()
    }
}

/// Reads one day out of the solar-system cache.
///
/// A missing cache file is not an error; there is simply nothing for today.
pub fn load_solar_system_day(path: &Path, date: NaiveDate) -> Result<Option<SolarSystemDay>> {
    if !path.exists() {
        debug!("No solar system cache at {}", path.display());
        return Ok(None);
    }

    let data = fs::read_to_string(path)?;
    let mut days: HashMap<String, SolarSystemDay> = serde_json::from_str(&data)?;
    Ok(days.remove(&date_key(date)))
}
