use crate::core::rotation::{CursorStore, FileCursorStore, RotatingSelector};
use crate::core::{Catalog, Config};
use crate::ui::markup::{self, line_align_left_wide};
use crate::ui::wrap_text;
use anyhow::{Context, Result};
use std::path::Path;

const WRAP_WIDTH: usize = 120;

/// The two screens the widget alternates between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Glossary,
    Legend,
}

pub const VIEWS: [View; 2] = [View::Glossary, View::Legend];

/// (row colour, type, temperature, colour, luminosity class, description)
const LEGEND: [(&str, &str, &str, &str, &str, &str); 7] = [
    ("Blue", "O", "> 30,000", "Blue", "I", "Supergiant"),
    ("#aabfff", "B", "  10,000 - 30,000", "Blue-white", "II", "Bright giant"),
    ("White", "A", "   7,500 - 10,000", "White", "III", "Giant"),
    ("#ffffe0", "F", "   6,000 -  7,500", "Yellow-White", "IV", "Sub-giant"),
    ("Yellow", "G", "   5,200 -  6,000", "Yellow", "V", "Main Sequence (Dwarf)"),
    ("Orange", "K", "   3,700 -  5,200", "Orange", "VI", "Sub-dwarf"),
    ("Red", "M", "<  3,700", "Red", "VII", "White-dwarf (Dead core)"),
];

pub fn execute(config: &Config) -> Result<()> {
    let paths = config.paths();
    let mut store = FileCursorStore::new(&paths.definition_toggle);
    let view = next_view(&mut store);

    super::print_widget(
        &markup::section_title("Definitions", ""),
        render(view, &paths.definition_data),
    );
    Ok(())
}

/// Advances the toggle and returns the view to show this run
pub fn next_view<S: CursorStore + ?Sized>(store: &mut S) -> View {
    let page = RotatingSelector::new(1).select(&VIEWS, store);
    let view = page.iter().next().copied().unwrap_or(View::Glossary);
    view
}

pub fn render(view: View, glossary_path: &Path) -> Result<String> {
    match view {
        View::Glossary => {
            let glossary = Catalog::<String>::load(glossary_path)
                .context("Failed to load definitions")?;
            Ok(render_glossary(&glossary))
        }
        View::Legend => Ok(render_legend()),
    }
}

/// Each term with its definition wrapped under a fixed tab stop
pub fn render_glossary(glossary: &Catalog<String>) -> String {
    glossary
        .entries()
        .iter()
        .flat_map(|(term, definition)| {
            wrap_text(definition, WRAP_WIDTH)
                .into_iter()
                .map(move |line| line_align_left_wide(term, &line))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_legend() -> String {
    let mut lines = vec![
        legend_line(
            "Yellow",
            "Spectral Type",
            "Temperature (K)",
            "Color",
            "Luminosity Class",
            "Description",
        ),
        "${goto 10}${color gray}${hr 1}".to_string(),
    ];

    lines.extend(
        LEGEND
            .iter()
            .map(|(color, class, temp, name, lum, desc)| {
                legend_line(color, class, temp, name, lum, desc)
            }),
    );

    lines.join("\n")
}

fn legend_line(color: &str, class: &str, temp: &str, name: &str, lum: &str, desc: &str) -> String {
    format!(
        "${{goto 20}}${{color {}}}{:<16}{:<20}{:<12}${{color white}}                  | {:<20}{:<30}",
        color, class, temp, name, lum, desc
    )
}
