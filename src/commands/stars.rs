use crate::core::rotation::{select_page, FileCursorStore};
use crate::core::sky::StarRecord;
use crate::core::spectral::parse_spectral_type;
use crate::core::{Catalog, Config};
use crate::ui::format_grouped_width;
use crate::ui::markup::{self, nothing_to_display, table_header, table_rule, visibility_color};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

const COLUMNS: &str = "| Constellation   | Meaning           | Temperature   | Star type     | Az   | Alt  | Distance     | Mass      ";

pub fn execute(config: &Config) -> Result<()> {
    let title = format!(
        "{}\n{}\n{}",
        markup::section_title("Stars", ""),
        table_header(20, "Star", COLUMNS),
        table_rule(10)
    );
    super::print_widget(&title, body(config));
    Ok(())
}

fn body(config: &Config) -> Result<String> {
    let paths = config.paths();
    let catalog = Catalog::<StarRecord>::load(&paths.star_data)
        .context("Failed to load star catalog")?
        .without("Sun");

    let mut store = FileCursorStore::new(&paths.star_toggle);
    let page = select_page(catalog.entries(), &mut store, config.star_page_size);
    if page.is_empty() {
        return Ok(nothing_to_display("stars"));
    }

    Ok(render(&page.items, Local::now().date_naive()))
}

/// One table row per star, positioned for `today`
pub fn render(stars: &[&(String, StarRecord)], today: NaiveDate) -> String {
    stars
        .iter()
        .map(|(name, star)| star_line(name, star, today))
        .collect::<Vec<_>>()
        .join("\n")
}

fn star_line(name: &str, star: &StarRecord, today: NaiveDate) -> String {
    let spectral = parse_spectral_type(star.spectral_type.as_deref().unwrap_or("---"));

    let (visibility, azimuth, altitude) = match star.position_on(today) {
        Some(position) => (
            visibility_color(position.altitude_deg),
            format!("{:03.0}°", position.azimuth_deg),
            format!("{:+03.0}°", position.altitude_deg),
        ),
        None => ("lightgray", "---°".to_string(), "---°".to_string()),
    };

    format!(
        "${{goto 20}}${{font}}${{color cyan}}{:<12.12}${{alignr}}| {:<15} | {:<17} | ${{color {}}}{:<13} | {:<13}${{color {}}} | {} | {} | {} ly | {:>7.2} MS",
        name,
        star.constellation.as_deref().unwrap_or("Unknown"),
        star.meaning.as_deref().unwrap_or("Unknown"),
        spectral.color_code,
        spectral.color,
        spectral.size,
        visibility,
        azimuth,
        altitude,
        format_grouped_width(star.distance_ly.unwrap_or(0.0), 1, 9),
        star.mass_msun.unwrap_or(0.0)
    )
}
