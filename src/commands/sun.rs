use crate::core::astronomy::{AstronomyClient, AstronomyReport};
use crate::core::sky::{load_solar_system_day, SolarSystemDay};
use crate::core::Config;
use crate::error::StrikerError;
use crate::ui::formatters::{format_clock_12h, humanize};
use crate::ui::markup;
use crate::ui::wrap_text;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime, TimeZone, Utc};
use log::debug;
use std::fmt::Display;

const LINE_PREFIX: &str = "${goto 30}${alignc}${font4}";

pub fn execute(config: &Config) -> Result<()> {
    super::print_widget(&markup::section_title("Sun & Moon", ""), body(config));
    Ok(())
}

fn body(config: &Config) -> Result<String> {
    match config.ip_geolocation_key.as_deref() {
        Some(key) => {
            let client = AstronomyClient::new(key)?;
            match client.today(config.observer()) {
                Ok(report) => Ok(render(&report)),
                Err(StrikerError::Api { status, message }) => Ok(render_api_failure(status, &message)),
                Err(e) => Err(e).context("Failed to fetch astronomy data"),
            }
        }
        None => {
            debug!("No ipgeolocation key, reading the solar system cache");
            let today = Utc::now().date_naive();
            let path = config.paths().solar_system_data;
            let day = load_solar_system_day(&path, today)
                .context("Failed to read solar system cache")?
                .ok_or_else(|| {
                    StrikerError::missing_data(format!(
                        "No solar system data for {} in {}",
                        today,
                        path.display()
                    ))
                })?;
            Ok(render(&AstronomyReport::from(localize(day, today, &Local))))
        }
    }
}

/// The cache stores UTC clock times; shift them into `tz`
pub fn localize<Tz>(mut day: SolarSystemDay, date: NaiveDate, tz: &Tz) -> SolarSystemDay
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let shift = |time: Option<String>| time.map(|t| utc_clock_to(&t, date, tz).unwrap_or(t));
    day.sunrise = shift(day.sunrise.take());
    day.sunset = shift(day.sunset.take());
    day.moonrise = shift(day.moonrise.take());
    day.moonset = shift(day.moonset.take());
    day
}

fn utc_clock_to<Tz>(time: &str, date: NaiveDate, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M").ok()?;
    let utc = Utc.from_utc_datetime(&date.and_time(time));
    Some(utc.with_timezone(tz).format("%H:%M").to_string())
}

pub fn render(report: &AstronomyReport) -> String {
    let sunrise = report.sunrise.as_deref().map(format_clock_12h);
    let sunset = report.sunset.as_deref().map(format_clock_12h);

    format!(
        "{p}${{color white}}Sunrise: {} | Sunset: {} | Day length: {} hours\n{p}${{color white}}{} moon | Moonrise: {} | Moonset: {} | Illumination: {}%",
        sunrise.as_deref().unwrap_or("--:--"),
        sunset.as_deref().unwrap_or("--:--"),
        report.day_length.as_deref().unwrap_or("--.--"),
        report
            .moon_phase
            .as_deref()
            .map(humanize)
            .unwrap_or_else(|| "-----".to_string()),
        report.moonrise.as_deref().unwrap_or("--:--"),
        report.moonset.as_deref().unwrap_or("--:--"),
        report.moon_illumination.as_deref().unwrap_or("-----"),
        p = LINE_PREFIX
    )
}

/// Status line plus the API's message wrapped in red
pub fn render_api_failure(status: u16, message: &str) -> String {
    let mut lines = vec![format!(
        "{}${{color white}}Request failed with status code {}",
        LINE_PREFIX, status
    )];
    lines.extend(
        wrap_text(message, 120)
            .into_iter()
            .map(|line| format!("{}${{color red}}{}", LINE_PREFIX, line)),
    );
    lines.join("\n")
}
