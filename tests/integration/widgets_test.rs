// Widgets driven from data files on disk, the way Conky runs them

use chrono::NaiveDate;
use std::fs;
use striker::commands::{definitions, planets, stars, sun};
use striker::core::astronomy::AstronomyReport;
use striker::core::rotation::{select_page, FileCursorStore};
use striker::core::sky::{load_solar_system_day, PlanetRecord, StarRecord};
use striker::core::{Catalog, DataPaths};
use tempfile::TempDir;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 22).unwrap()
}

fn write(path: &std::path::Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_star_table_rotates_between_runs() {
    let temp = TempDir::new().unwrap();
    let paths = DataPaths::under(temp.path());
    write(
        &paths.star_data,
        r#"{
            "Sun": {"spectral_type": "G2V"},
            "Vega": {"spectral_type": "A0Va", "daily_positions": {"2025-06-22": {"azimuth_deg": 60, "altitude_deg": 30}}},
            "Deneb": {"spectral_type": "A2Ia"},
            "Altair": {"spectral_type": "A7V"}
        }"#,
    );

    let catalog = Catalog::<StarRecord>::load(&paths.star_data)
        .unwrap()
        .without("Sun");

    let first_names = |out: &str| -> Vec<String> {
        out.lines()
            .map(|line| {
                line.split("${color cyan}").nth(1).unwrap()[..12]
                    .trim_end()
                    .to_string()
            })
            .collect()
    };

    let mut store = FileCursorStore::new(&paths.star_toggle);
    let page = select_page(catalog.entries(), &mut store, 2);
    let out = stars::render(&page.items, day());
    assert_eq!(first_names(&out), vec!["Vega", "Deneb"]);
    assert!(out.lines().next().unwrap().contains("${color green} | 060° | +30° |"));
    assert!(out.contains("Supergiant"));

    let mut store = FileCursorStore::new(&paths.star_toggle);
    let page = select_page(catalog.entries(), &mut store, 2);
    assert_eq!(first_names(&stars::render(&page.items, day())), vec!["Deneb", "Altair"]);
    assert_eq!(fs::read_to_string(&paths.star_toggle).unwrap(), "2");
}

#[test]
fn test_definitions_toggle_between_runs() {
    let temp = TempDir::new().unwrap();
    let paths = DataPaths::under(temp.path());
    write(
        &paths.definition_data,
        r#"{"Light year": "Distance light travels in one Julian year."}"#,
    );

    let mut store = FileCursorStore::new(&paths.definition_toggle);
    let view = definitions::next_view(&mut store);
    let glossary = definitions::render(view, &paths.definition_data).unwrap();
    assert!(glossary.contains("Light year:${goto 180}"));

    let mut store = FileCursorStore::new(&paths.definition_toggle);
    let view = definitions::next_view(&mut store);
    let legend = definitions::render(view, &paths.definition_data).unwrap();
    assert!(legend.contains("Spectral Type"));
    assert!(!legend.contains("Light year"));
}

#[test]
fn test_planets_and_sun_from_solar_system_cache() {
    let temp = TempDir::new().unwrap();
    let paths = DataPaths::under(temp.path());
    write(
        &paths.planet_data,
        r#"{"Mars": {"mass_earths": 0.107, "type": "Terrestrial", "distance_au": 2.1,
                     "magnitude": 1.5, "avg_temp_k": 210, "radius_km": 3389.5}}"#,
    );
    write(
        &paths.solar_system_data,
        r#"{"2025-06-22": {
            "sunrise": "05:57", "sunset": "21:03", "day_length": "15:06",
            "moon_phase": "Waxing Crescent", "moon_illumination_percent": 12.3,
            "planets": {"mars": {"azimuth_deg": 270.4, "altitude_deg": -10.2}}
        }}"#,
    );

    let today = load_solar_system_day(&paths.solar_system_data, day()).unwrap();
    assert!(today.is_some());

    let catalog = Catalog::<PlanetRecord>::load(&paths.planet_data).unwrap();
    let table = planets::render(&catalog, today.as_ref());
    assert!(table.contains("${color lightgray}|"));
    assert!(table.contains("| 270° | -10° |      2.10 AU |   0.11 Me"));

    let report = AstronomyReport::from(today.unwrap());
    let out = sun::render(&report);
    assert!(out.contains("Sunrise: 05:57 AM | Sunset: 09:03 PM | Day length: 15:06 hours"));
    assert!(out.contains("Waxing crescent moon"));
    assert!(out.contains("Illumination: 12.3%"));

    let tomorrow = day().succ_opt().unwrap();
    assert!(load_solar_system_day(&paths.solar_system_data, tomorrow)
        .unwrap()
        .is_none());
}
