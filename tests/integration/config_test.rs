use std::collections::HashMap;
use std::fs;
use std::path::Path;
use striker::commands::config::{set_value, ConfigKey};
use striker::core::config::{
    Config, DataPaths, ENV_AIRPORT_CODE, ENV_ASTRO_HOME, ENV_OPEN_WEATHER_KEY,
};
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(config.astro_home.is_none());
    assert!(config.open_weather_key.is_none());
    assert_eq!(config.network_interface, "eno0");
    assert_eq!(config.airport_page_size, 3);
}

#[test]
fn test_config_load_missing_returns_default() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_roundtrip_creates_parent_dir() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("striker").join("config.json");

    let config = Config {
        astro_home: Some("/opt/conky".to_string()),
        airport_code: "KDEN".to_string(),
        exoplanet_page_size: 5,
        ..Default::default()
    };
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.json");
    fs::write(&path, r#"{"star_page_size": 4}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.star_page_size, 4);
    assert_eq!(config.airport_code, "KSLC");
}

#[test]
fn test_environment_overrides_then_paths() {
    let env: HashMap<&str, &str> = [(ENV_ASTRO_HOME, "/srv/astro"), (ENV_AIRPORT_CODE, "KPHX")]
        .into_iter()
        .collect();

    let mut config = Config::default();
    config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.airport_code, "KPHX");
    let paths = config.paths();
    assert_eq!(paths, DataPaths::under(Path::new("/srv/astro")));
    assert_eq!(paths.star_toggle, Path::new("/srv/astro/cache/star-toggle.txt"));
    assert_eq!(paths.mountpoints, Path::new("/srv/astro/data/mountpoints.txt"));
}

#[test]
fn test_labelled_paths_cover_every_file() {
    let paths = DataPaths::under(Path::new("/home/user/.conky"));
    let labelled = paths.labelled();
    assert_eq!(labelled.len(), 10);
    assert!(labelled
        .iter()
        .all(|(_, path)| path.starts_with("/home/user/.conky")));
}

#[test]
fn test_set_keeps_environment_values_out_of_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("striker").join("config.json");
    Config {
        airport_code: "KDEN".to_string(),
        ..Default::default()
    }
    .save_to(&path)
    .unwrap();

    std::env::set_var(ENV_OPEN_WEATHER_KEY, "supersecretkey123");
    std::env::set_var(ENV_ASTRO_HOME, "/tmp/envhome");
    let result = set_value(&path, ConfigKey::StarPageSize, "4");
    std::env::remove_var(ENV_OPEN_WEATHER_KEY);
    std::env::remove_var(ENV_ASTRO_HOME);

    let config = result.unwrap();
    assert_eq!(config.star_page_size, 4);
    assert!(config.open_weather_key.is_none());

    let saved = fs::read_to_string(&path).unwrap();
    assert!(!saved.contains("supersecretkey123"));
    assert!(!saved.contains("/tmp/envhome"));

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.star_page_size, 4);
    assert_eq!(reloaded.airport_code, "KDEN");
    assert!(reloaded.astro_home.is_none());
}
