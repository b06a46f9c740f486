// Rotation across separate runs, with the cursor kept on disk

use std::fs;
use std::time::{Duration, UNIX_EPOCH};
use striker::core::rotation::{select_page, FileCursorStore, IntervalCursor, RotatingSelector};
use tempfile::TempDir;

fn letters() -> Vec<&'static str> {
    vec!["A", "B", "C"]
}

/// Each run builds a fresh store, like a new process would
fn run(path: &std::path::Path, catalog: &[&'static str], page_size: usize) -> Vec<&'static str> {
    let mut store = FileCursorStore::new(path);
    let page = select_page(catalog, &mut store, page_size);
    assert!(page.write_error.is_none());
    page.iter().copied().collect()
}

#[test]
fn test_pages_advance_between_runs() {
    let temp = TempDir::new().unwrap();
    let cursor = temp.path().join("cache").join("star-toggle.txt");
    let catalog = letters();

    let expected = [
        (vec!["A", "B"], "1"),
        (vec!["B", "C"], "2"),
        (vec!["C", "A"], "0"),
        (vec!["A", "B"], "1"),
    ];

    for (page, persisted) in expected {
        assert_eq!(run(&cursor, &catalog, 2), page);
        assert_eq!(fs::read_to_string(&cursor).unwrap(), persisted);
    }
}

#[test]
fn test_first_items_cover_catalog_in_order() {
    let temp = TempDir::new().unwrap();
    let cursor = temp.path().join("toggle.txt");
    let catalog = vec!["Sirius", "Vega", "Deneb", "Altair", "Rigel"];

    let firsts: Vec<&str> = (0..catalog.len())
        .map(|_| run(&cursor, &catalog, 3)[0])
        .collect();
    assert_eq!(firsts, catalog);
}

#[test]
fn test_corrupt_cursor_file_restarts_at_zero() {
    let temp = TempDir::new().unwrap();
    let cursor = temp.path().join("toggle.txt");
    fs::write(&cursor, "not a number\n").unwrap();

    assert_eq!(run(&cursor, &letters(), 1), vec!["A"]);
    assert_eq!(fs::read_to_string(&cursor).unwrap(), "1");
}

#[test]
fn test_negative_cursor_wraps_from_the_end() {
    let temp = TempDir::new().unwrap();
    let cursor = temp.path().join("toggle.txt");
    fs::write(&cursor, "-2").unwrap();

    assert_eq!(run(&cursor, &letters(), 1), vec!["B"]);
    assert_eq!(fs::read_to_string(&cursor).unwrap(), "2");
}

#[test]
fn test_cursor_past_shrunken_catalog_wraps() {
    let temp = TempDir::new().unwrap();
    let cursor = temp.path().join("toggle.txt");
    fs::write(&cursor, "7").unwrap();

    assert_eq!(run(&cursor, &letters(), 2), vec!["B", "C"]);
    assert_eq!(fs::read_to_string(&cursor).unwrap(), "2");
}

#[test]
fn test_empty_catalog_leaves_no_cursor_file() {
    let temp = TempDir::new().unwrap();
    let cursor = temp.path().join("toggle.txt");
    let empty: Vec<&str> = Vec::new();

    let mut store = FileCursorStore::new(&cursor);
    let page = select_page(&empty, &mut store, 8);
    assert!(page.is_empty());
    assert_eq!(page.next, None);
    assert!(!cursor.exists());
}

#[test]
fn test_unwritable_cursor_still_returns_page() {
    let temp = TempDir::new().unwrap();
    // A directory where the cursor file should be
    let cursor = temp.path().join("toggle.txt");
    fs::create_dir(&cursor).unwrap();

    let catalog = letters();
    let mut store = FileCursorStore::new(&cursor);
    let page = RotatingSelector::new(2).select(&catalog, &mut store);
    assert_eq!(page.iter().copied().collect::<Vec<_>>(), vec!["A", "B"]);
    assert!(page.write_error.is_some());
}

#[test]
fn test_interval_cursor_rotates_by_time_slot() {
    let catalog = vec!["KDEN", "KLAX", "KPHX", "KSEA"];
    let interval = Duration::from_secs(180);

    let page_at = |secs: u64| {
        let mut cursor = IntervalCursor::at(UNIX_EPOCH + Duration::from_secs(secs), interval);
        select_page(&catalog, &mut cursor, 3)
            .iter()
            .copied()
            .collect::<Vec<_>>()
    };

    assert_eq!(page_at(0), vec!["KDEN", "KLAX", "KPHX"]);
    assert_eq!(page_at(179), vec!["KDEN", "KLAX", "KPHX"]);
    assert_eq!(page_at(180), vec!["KLAX", "KPHX", "KSEA"]);
    assert_eq!(page_at(180 * 4), vec!["KDEN", "KLAX", "KPHX"]);
}
