use crate::core::rotation::{select_page, FileCursorStore};
use crate::core::sky::ExoplanetRecord;
use crate::core::spectral::{classify_world_type, parse_spectral_type};
use crate::core::{Catalog, Config};
use crate::ui::format_grouped_width;
use crate::ui::markup::{nothing_to_display, table_header, table_rule, visibility_color};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};

const COLUMNS: &str = "| Host star          | Temperature   | Star type     | World Type    | Az   | Alt  | Distance     | Mass      ";

pub fn execute(config: &Config) -> Result<()> {
    let title = format!("{}\n{}", table_header(20, "Exoplanet", COLUMNS), table_rule(10));
    super::print_widget(&title, body(config));
    Ok(())
}

fn body(config: &Config) -> Result<String> {
    let paths = config.paths();
    let catalog = Catalog::<ExoplanetRecord>::load(&paths.exoplanet_data)
        .context("Failed to load exoplanet catalog")?;

    let mut store = FileCursorStore::new(&paths.exoplanet_toggle);
    let page = select_page(catalog.entries(), &mut store, config.exoplanet_page_size);
    if page.is_empty() {
        return Ok(nothing_to_display("exoplanets"));
    }

    // Observations are keyed by UTC date
    Ok(render(&page.items, Utc::now().date_naive()))
}

pub fn render(planets: &[&(String, ExoplanetRecord)], today: NaiveDate) -> String {
    planets
        .iter()
        .map(|(name, planet)| planet_line(name, planet, today))
        .collect::<Vec<_>>()
        .join("\n")
}

fn planet_line(name: &str, planet: &ExoplanetRecord, today: NaiveDate) -> String {
    let spectral = parse_spectral_type(planet.star_spectral_type.as_deref().unwrap_or(""));
    let world_type = planet
        .world_type
        .as_deref()
        .filter(|w| !w.is_empty())
        .unwrap_or_else(|| classify_world_type(planet.mass_earth));

    let (visibility, azimuth, altitude) = match planet.position_on(today) {
        Some(position) => (
            visibility_color(position.altitude_deg),
            format!("{:03.0}°", position.azimuth_deg),
            format!("{:+03.0}°", position.altitude_deg),
        ),
        None => ("lightgray", "---°".to_string(), "---°".to_string()),
    };

    let short_name: String = name.chars().take(18).collect();
    format!(
        "${{goto 20}}${{color cyan}}{}${{alignr}}${{color {vis}}}| {:<18.18} | ${{color {}}}{:<13} | {:<13}${{color {vis}}} | {:<13}${{color {vis}}} | {} | {} | {} ly | {:>7.2} Me",
        short_name,
        planet.host_star.as_deref().unwrap_or(""),
        spectral.color_code,
        spectral.color,
        spectral.size,
        world_type,
        azimuth,
        altitude,
        format_grouped_width(planet.star_distance_ly.unwrap_or(0.0), 2, 9),
        planet.mass_earth.unwrap_or(0.0),
        vis = visibility
    )
}
