use crate::core::Config;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

/// Keys accepted by `striker set` and `striker get`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    AstroHome,
    AirportCode,
    OpenWeatherKey,
    IpGeolocationKey,
    Latitude,
    Longitude,
    PublicIp,
    NetworkInterface,
    StarPageSize,
    ExoplanetPageSize,
    AirportPageSize,
    AirportRotationSecs,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 12] = [
        ConfigKey::AstroHome,
        ConfigKey::AirportCode,
        ConfigKey::OpenWeatherKey,
        ConfigKey::IpGeolocationKey,
        ConfigKey::Latitude,
        ConfigKey::Longitude,
        ConfigKey::PublicIp,
        ConfigKey::NetworkInterface,
        ConfigKey::StarPageSize,
        ConfigKey::ExoplanetPageSize,
        ConfigKey::AirportPageSize,
        ConfigKey::AirportRotationSecs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::AstroHome => "astro-home",
            ConfigKey::AirportCode => "airport-code",
            ConfigKey::OpenWeatherKey => "open-weather-key",
            ConfigKey::IpGeolocationKey => "ip-geolocation-key",
            ConfigKey::Latitude => "latitude",
            ConfigKey::Longitude => "longitude",
            ConfigKey::PublicIp => "public-ip",
            ConfigKey::NetworkInterface => "network-interface",
            ConfigKey::StarPageSize => "star-page-size",
            ConfigKey::ExoplanetPageSize => "exoplanet-page-size",
            ConfigKey::AirportPageSize => "airport-page-size",
            ConfigKey::AirportRotationSecs => "airport-rotation-secs",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(ConfigKey::name).collect()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }

    fn is_secret(&self) -> bool {
        matches!(self, ConfigKey::OpenWeatherKey | ConfigKey::IpGeolocationKey)
    }

    fn example_value(&self) -> &'static str {
        match self {
            ConfigKey::AstroHome => "~/.conky/striker",
            ConfigKey::AirportCode => "KSLC",
            ConfigKey::OpenWeatherKey | ConfigKey::IpGeolocationKey => "<api key>",
            ConfigKey::Latitude => "40.5144",
            ConfigKey::Longitude => "-112.0325",
            ConfigKey::PublicIp => "86.38.51.194",
            ConfigKey::NetworkInterface => "eno0",
            ConfigKey::StarPageSize | ConfigKey::ExoplanetPageSize => "8",
            ConfigKey::AirportPageSize => "3",
            ConfigKey::AirportRotationSecs => "180",
        }
    }

    pub fn set(&self, config: &mut Config, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            bail!("A value is required for {}", self.name());
        }

        match self {
            ConfigKey::AstroHome => config.astro_home = Some(value.to_string()),
            ConfigKey::AirportCode => config.airport_code = value.to_uppercase(),
            ConfigKey::OpenWeatherKey => config.open_weather_key = Some(value.to_string()),
            ConfigKey::IpGeolocationKey => config.ip_geolocation_key = Some(value.to_string()),
            ConfigKey::Latitude => config.latitude = parse_degrees(value, 90.0)?,
            ConfigKey::Longitude => config.longitude = parse_degrees(value, 180.0)?,
            ConfigKey::PublicIp => config.public_ip = Some(value.to_string()),
            ConfigKey::NetworkInterface => config.network_interface = value.to_string(),
            ConfigKey::StarPageSize => config.star_page_size = parse_count(value)?,
            ConfigKey::ExoplanetPageSize => config.exoplanet_page_size = parse_count(value)?,
            ConfigKey::AirportPageSize => config.airport_page_size = parse_count(value)?,
            ConfigKey::AirportRotationSecs => {
                config.airport_rotation_secs = parse_count(value)? as u64
            }
        }
        Ok(())
    }

    pub fn get(&self, config: &Config) -> Option<String> {
        match self {
            ConfigKey::AstroHome => config.astro_home.clone(),
            ConfigKey::AirportCode => Some(config.airport_code.clone()),
            ConfigKey::OpenWeatherKey => config.open_weather_key.clone(),
            ConfigKey::IpGeolocationKey => config.ip_geolocation_key.clone(),
            ConfigKey::Latitude => Some(config.latitude.to_string()),
            ConfigKey::Longitude => Some(config.longitude.to_string()),
            ConfigKey::PublicIp => config.public_ip.clone(),
            ConfigKey::NetworkInterface => Some(config.network_interface.clone()),
            ConfigKey::StarPageSize => Some(config.star_page_size.to_string()),
            ConfigKey::ExoplanetPageSize => Some(config.exoplanet_page_size.to_string()),
            ConfigKey::AirportPageSize => Some(config.airport_page_size.to_string()),
            ConfigKey::AirportRotationSecs => Some(config.airport_rotation_secs.to_string()),
        }
    }

    /// Value as shown to the user; API keys are masked
    pub fn display_value(&self, config: &Config) -> Option<String> {
        let value = self.get(config)?;
        if self.is_secret() {
            Some(mask(&value))
        } else {
            Some(value)
        }
    }
}

fn parse_degrees(value: &str, limit: f64) -> Result<f64> {
    let degrees: f64 = value
        .parse()
        .with_context(|| format!("'{}' is not a number", value))?;
    if !(-limit..=limit).contains(&degrees) {
        bail!("{} is outside -{}..{}", degrees, limit, limit);
    }
    Ok(degrees)
}

fn parse_count(value: &str) -> Result<usize> {
    let count: usize = value
        .parse()
        .with_context(|| format!("'{}' is not a whole number", value))?;
    if count == 0 {
        bail!("Value must be at least 1");
    }
    Ok(count)
}

fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    format!("{}{}", visible, "*".repeat(secret.chars().count().saturating_sub(4)))
}

fn key_from_matches(matches: &clap::ArgMatches) -> Result<ConfigKey> {
    let name = matches
        .get_one::<String>("key")
        .context("Key argument is required")?;
    ConfigKey::from_name(name).with_context(|| {
        format!("Unknown key '{}' (expected one of: {})", name, ConfigKey::names().join(", "))
    })
}

pub fn handle_set(matches: &clap::ArgMatches) -> Result<()> {
    let key = key_from_matches(matches)?;
    let value = matches
        .get_one::<String>("value")
        .context("Value argument is required")?;

    if key == ConfigKey::AstroHome && !Path::new(value).exists() {
        println!(
            "{}",
            format!("⚠️  Warning: Path '{}' does not exist", value).yellow()
        );
        println!(
            "{}",
            "The path will be saved; widgets will report missing data until it is populated."
                .dimmed()
        );
    }

    let config = set_value(&Config::get_config_path()?, key, value)?;

    println!(
        "{} {}",
        format!("✓ {} set to:", key.name()).green(),
        key.display_value(&config).unwrap_or_default()
    );
    Ok(())
}

/// Update one key in the config file at `path`.
///
/// Only the file's own contents are rewritten; environment overrides are
/// never folded in, so secrets supplied through the environment stay there.
pub fn set_value(path: &Path, key: ConfigKey, value: &str) -> Result<Config> {
    let mut config = Config::load_from(path)?;
    key.set(&mut config, value)?;
    config.save_to(path)?;
    Ok(config)
}

pub fn handle_get(matches: &clap::ArgMatches) -> Result<()> {
    let key = key_from_matches(matches)?;
    let config = Config::load()?;

    match key.display_value(&config) {
        Some(value) => {
            println!("{}", format!("{}:", key.name()).white());
            println!("{}", value.cyan().bold());
        }
        None => {
            println!("{}", format!("No {} configured.", key.name()).yellow());
            println!();
            println!("{}", "To set it, run:".white());
            println!("  {}", format!("striker set {} <value>", key.name()).cyan().bold());
            println!();
            println!("{}", "Example:".dimmed());
            println!(
                "  {}",
                format!("striker set {} {}", key.name(), key.example_value()).dimmed()
            );
        }
    }
    Ok(())
}

/// Lists the config file and every data, cache and cursor file the widgets use
pub fn handle_paths() -> Result<()> {
    let config = Config::load()?;
    let paths = config.paths();

    println!("{} {}", "Config:".white(), Config::get_config_path()?.display());
    println!("{} {}", "Home:  ".white(), config.astro_home().display());
    println!();

    for (label, path) in paths.labelled() {
        let marker = if path.exists() {
            "✓".green()
        } else {
            "✗".yellow()
        };
        println!("  {} {:<18} {}", marker, label, path.display().to_string().dimmed());
    }
    Ok(())
}
