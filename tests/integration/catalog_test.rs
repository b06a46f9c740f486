use std::fs;
use striker::core::sky::{ExoplanetRecord, StarRecord};
use striker::core::weather::Airport;
use striker::core::Catalog;
use tempfile::TempDir;

#[test]
fn test_star_catalog_from_disk_keeps_order_and_drops_sun() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("star-data.json");
    fs::write(
        &path,
        r#"{
            "Vega": {"constellation": "Lyra", "spectral_type": "A0Va"},
            "Sun": {"spectral_type": "G2V"},
            "Arcturus": {"constellation": "Boötes", "visual_mag": -0.05},
            "Altair": {}
        }"#,
    )
    .unwrap();

    let catalog = Catalog::<StarRecord>::load(&path).unwrap().without("Sun");
    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(names, vec!["Vega", "Arcturus", "Altair"]);
    assert_eq!(catalog.get("Arcturus").unwrap().app_mag, Some(-0.05));
}

#[test]
fn test_array_shaped_airport_catalog() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("airport-data.json");
    fs::write(
        &path,
        r#"[
            {"code": "KSLC", "name": "Salt Lake City International", "latitude": 40.7884, "longitude": -111.9778},
            {"code": "KDEN", "name": "Denver International", "location": "Denver, CO", "latitude": 39.8561, "longitude": -104.6737}
        ]"#,
    )
    .unwrap();

    let airports = Catalog::<Airport>::load(&path).unwrap();
    assert_eq!(airports.len(), 2);
    assert_eq!(airports.get("KDEN").unwrap().location, "Denver, CO");
    assert_eq!(airports.get("KSLC").unwrap().location, "");
}

#[test]
fn test_missing_and_malformed_catalogs() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("exoplanet-data.json");

    let err = Catalog::<ExoplanetRecord>::load(&missing).unwrap_err();
    assert!(err.to_string().contains("File not found"));

    fs::write(&missing, "{ not json").unwrap();
    assert!(Catalog::<ExoplanetRecord>::load(&missing).is_err());
}

#[test]
fn test_empty_object_is_an_empty_catalog() {
    let catalog = Catalog::<StarRecord>::from_json_str("{}").unwrap();
    assert!(catalog.is_empty());
}
