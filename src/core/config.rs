use crate::core::geo::Coordinates;
use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_AIRPORT_CODE: &str = "KSLC";
pub const DEFAULT_NETWORK_INTERFACE: &str = "eno0";

/// Herriman, UT
const DEFAULT_LATITUDE: f64 = 40.5144;
const DEFAULT_LONGITUDE: f64 = -112.0325;

/// Environment variables that take precedence over the config file
pub const ENV_ASTRO_HOME: &str = "CONKY_ASTRO_HOME";
pub const ENV_AIRPORT_CODE: &str = "CONKY_AIRPORT_CODE";
pub const ENV_OPEN_WEATHER_KEY: &str = "KEY_OPEN_WEATHER_API";
pub const ENV_IP_GEOLOCATION_KEY: &str = "IP_GEO_LOCATION_KEY";
pub const ENV_PUBLIC_IP: &str = "CONKY_PUBLIC_IP";
pub const ENV_NETWORK_INTERFACE: &str = "CONKY_NETWORK_INTERFACE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root holding the `data/` and `cache/` directories
    pub astro_home: Option<String>,
    /// Airport whose weather is always shown first
    pub airport_code: String,
    pub open_weather_key: Option<String>,
    pub ip_geolocation_key: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Expected public address (e.g. the VPN exit); shown next to the live one
    pub public_ip: Option<String>,
    pub network_interface: String,
    pub star_page_size: usize,
    pub exoplanet_page_size: usize,
    pub airport_page_size: usize,
    /// How long each airport page stays on screen
    pub airport_rotation_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            astro_home: None,
            airport_code: DEFAULT_AIRPORT_CODE.to_string(),
            open_weather_key: None,
            ip_geolocation_key: None,
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            public_ip: None,
            network_interface: DEFAULT_NETWORK_INTERFACE.to_string(),
            star_page_size: 8,
            exoplanet_page_size: 8,
            airport_page_size: 3,
            airport_rotation_secs: 3 * 60,
        }
    }
}

impl Config {
    /// Load the user config and apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load a config file without environment overrides.
    ///
    /// A missing, empty or unreadable-as-JSON file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            warn!("Ignoring corrupt config {}: {}", path.display(), e);
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, data)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("striker").join("config.json"))
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from any key lookup; blank values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(home) = get(ENV_ASTRO_HOME) {
            self.astro_home = Some(home);
        }
        if let Some(code) = get(ENV_AIRPORT_CODE) {
            self.airport_code = code;
        }
        if let Some(key) = get(ENV_OPEN_WEATHER_KEY) {
            self.open_weather_key = Some(key);
        }
        if let Some(key) = get(ENV_IP_GEOLOCATION_KEY) {
            self.ip_geolocation_key = Some(key);
        }
        if let Some(ip) = get(ENV_PUBLIC_IP) {
            self.public_ip = Some(ip);
        }
        if let Some(iface) = get(ENV_NETWORK_INTERFACE) {
            self.network_interface = iface;
        }
    }

    /// Directory holding `data/` and `cache/`
    pub fn astro_home(&self) -> PathBuf {
        match &self.astro_home {
            Some(home) => PathBuf::from(home),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("striker"),
        }
    }

    pub fn paths(&self) -> DataPaths {
        DataPaths::under(&self.astro_home())
    }

    pub fn observer(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Every file the widgets read or write.
///
/// Hand-maintained inputs live in `data/`; generated catalogs and rotation
/// cursors live in `cache/`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub airport_data: PathBuf,
    pub definition_data: PathBuf,
    pub planet_data: PathBuf,
    pub mountpoints: PathBuf,
    pub star_data: PathBuf,
    pub star_toggle: PathBuf,
    pub exoplanet_data: PathBuf,
    pub exoplanet_toggle: PathBuf,
    pub definition_toggle: PathBuf,
    pub solar_system_data: PathBuf,
}

impl DataPaths {
    pub fn under(home: &Path) -> Self {
        let data_dir = home.join("data");
        let cache_dir = home.join("cache");

        Self {
            airport_data: data_dir.join("airport-data.json"),
            definition_data: data_dir.join("definitions.json"),
            planet_data: data_dir.join("planet-data.json"),
            mountpoints: data_dir.join("mountpoints.txt"),
            star_data: cache_dir.join("star-data.json"),
            star_toggle: cache_dir.join("star-toggle.txt"),
            exoplanet_data: cache_dir.join("exoplanet-data.json"),
            exoplanet_toggle: cache_dir.join("exoplanet-toggle.txt"),
            definition_toggle: cache_dir.join("definition-toggle.txt"),
            solar_system_data: cache_dir.join("solar-system-data.json"),
            data_dir,
            cache_dir,
        }
    }

    /// (label, path) pairs for display
    pub fn labelled(&self) -> Vec<(&'static str, &Path)> {
        vec![
            ("Airports", self.airport_data.as_path()),
            ("Definitions", self.definition_data.as_path()),
            ("Planets", self.planet_data.as_path()),
            ("Mountpoints", self.mountpoints.as_path()),
            ("Stars", self.star_data.as_path()),
            ("Star cursor", self.star_toggle.as_path()),
            ("Exoplanets", self.exoplanet_data.as_path()),
            ("Exoplanet cursor", self.exoplanet_toggle.as_path()),
            ("Definition cursor", self.definition_toggle.as_path()),
            ("Solar system", self.solar_system_data.as_path()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.airport_code, "KSLC");
        assert_eq!(config.star_page_size, 8);
        assert_eq!(config.airport_rotation_secs, 180);
        assert!(config.open_weather_key.is_none());
    }

    #[test]
    fn test_overrides_skip_blank_values() {
        let vars: HashMap<&str, &str> = [
            (ENV_ASTRO_HOME, "/opt/astro"),
            (ENV_AIRPORT_CODE, "  "),
            (ENV_OPEN_WEATHER_KEY, "abc123"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.astro_home.as_deref(), Some("/opt/astro"));
        assert_eq!(config.airport_code, "KSLC");
        assert_eq!(config.open_weather_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_paths_layout() {
        let paths = DataPaths::under(Path::new("/astro"));
        assert_eq!(paths.airport_data, Path::new("/astro/data/airport-data.json"));
        assert_eq!(paths.star_toggle, Path::new("/astro/cache/star-toggle.txt"));
        assert_eq!(paths.labelled().len(), 10);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.json");

        let config = Config {
            airport_code: "KDEN".to_string(),
            star_page_size: 4,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_corrupt_or_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        fs::write(&path, "{not json").unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        fs::write(&path, r#"{"airport_code": "KPVU"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.airport_code, "KPVU");
        assert_eq!(config.network_interface, DEFAULT_NETWORK_INTERFACE);
    }
}
