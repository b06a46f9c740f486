use crate::core::sky::{load_solar_system_day, PlanetRecord, SolarSystemDay};
use crate::core::units::{kelvin_to_fahrenheit, kilometers_to_miles};
use crate::core::{Catalog, Config};
use crate::ui::format_grouped_width;
use crate::ui::markup::{self, table_header, table_rule, visibility_color};
use anyhow::{Context, Result};
use chrono::Utc;

const COLUMNS: &str = "| Radius        | Temp       | Mag    | World Type     | Az   | Alt  | Distance     | Mass     ";

pub fn execute(config: &Config) -> Result<()> {
    let title = format!(
        "{}\n{}\n{}",
        markup::section_title("Planets", ""),
        table_header(30, "Planet", COLUMNS),
        table_rule(30)
    );
    super::print_widget(&title, body(config));
    Ok(())
}

fn body(config: &Config) -> Result<String> {
    let paths = config.paths();
    let planets = Catalog::<PlanetRecord>::load(&paths.planet_data)
        .context("Failed to load planet data")?;
    let today = load_solar_system_day(&paths.solar_system_data, Utc::now().date_naive())
        .context("Failed to read solar system cache")?;

    if today.is_none() {
        log::info!("No solar system positions cached for today");
    }

    Ok(render(&planets, today.as_ref()))
}

/// Planet table; positions come from today's cache entry when there is one
pub fn render(planets: &Catalog<PlanetRecord>, today: Option<&SolarSystemDay>) -> String {
    planets
        .entries()
        .iter()
        .map(|(name, planet)| planet_line(name, planet, today))
        .collect::<Vec<_>>()
        .join("\n")
}

fn planet_line(name: &str, planet: &PlanetRecord, today: Option<&SolarSystemDay>) -> String {
    let position = today.and_then(|day| day.planet_position(name));
    let visibility = position
        .map(|p| visibility_color(p.altitude_deg))
        .unwrap_or("lightgray");

    // Earth is where we stand
    let sky = if name == "Earth" {
        "---- | ---- | ------------".to_string()
    } else {
        let (azimuth, altitude) = match position {
            Some(p) => (
                format!("{:03.0}°", p.azimuth_deg),
                format!("{:+03.0}°", p.altitude_deg),
            ),
            None => ("---°".to_string(), "---°".to_string()),
        };
        format!(
            "{} | {} | {} AU",
            azimuth,
            altitude,
            optional(planet.distance_au, 9, |d| format_grouped_width(d, 2, 9))
        )
    };

    format!(
        "${{goto 40}}${{color cyan}}{}${{alignr}}${{color {}}}| {} mi | {}°F | {} | {:<14} | {} | {} Me",
        name,
        visibility,
        optional(planet.radius_km, 10, |r| format_grouped_width(kilometers_to_miles(r), 0, 10)),
        optional(planet.avg_temp_k, 8, |k| format!("{:>+8.0}", kelvin_to_fahrenheit(k))),
        optional(planet.magnitude, 6, |m| format!("{:+06.2}", m)),
        planet.planet_type.as_deref().unwrap_or("-"),
        sky,
        optional(planet.mass_earths, 6, |m| format!("{:>6.2}", m))
    )
}

/// Renders `value`, or a right-aligned dash of the same width
fn optional<F>(value: Option<f64>, width: usize, render: F) -> String
where
    F: Fn(f64) -> String,
{
    match value {
        Some(v) => render(v),
        None => format!("{:>width$}", "-", width = width),
    }
}
