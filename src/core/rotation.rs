//! Round-robin paging over a catalog.
//!
//! Each widget run is a separate short-lived process, so the position in the
//! catalog lives in a [`CursorStore`]. A run reads the cursor, takes a page
//! starting there, and writes back the cursor advanced by exactly one.
//!
//! Two runs racing on the same store are not coordinated: the last writer
//! wins and a page may be repeated or skipped.

use crate::error::{Result, StrikerError};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Persisted cursor backing a [`RotatingSelector`].
pub trait CursorStore {
    /// Returns the stored cursor, or `None` when it is absent or unparseable.
    /// Any integer is accepted; the selector reduces it modulo the catalog length.
    fn read(&self) -> Option<i64>;

    fn write(&mut self, cursor: usize) -> Result<()>;
}

/// Cursor kept as a decimal number in a small text file.
#[derive(Debug, Clone)]
pub struct FileCursorStore {
    path: PathBuf,
}

impl FileCursorStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CursorStore for FileCursorStore {
    fn read(&self) -> Option<i64> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match raw.trim().parse() {
            Ok(cursor) => Some(cursor),
            Err(_) => {
                debug!(
                    "Ignoring unparseable cursor {:?} in {}",
                    raw.trim(),
                    self.path.display()
                );
                None
            }
        }
    }

    fn write(&mut self, cursor: usize) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, cursor.to_string())?;
        Ok(())
    }
}

/// In-process cursor, used where nothing needs to outlive the process.
#[derive(Debug, Default)]
pub struct MemoryCursorStore {
    cursor: Option<usize>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryCursorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cursor(cursor: usize) -> Self {
        Self {
            cursor: Some(cursor),
            ..Self::default()
        }
    }

    /// A store whose writes always fail; the stored cursor never changes.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl CursorStore for MemoryCursorStore {
    fn read(&self) -> Option<i64> {
        self.cursor.map(|cursor| cursor as i64)
    }

    fn write(&mut self, cursor: usize) -> Result<()> {
        if self.fail_writes {
            return Err(StrikerError::other("cursor store is read-only"));
        }
        self.cursor = Some(cursor);
        self.writes += 1;
        Ok(())
    }
}

/// Cursor derived from the wall clock: it moves forward once per `interval`
/// no matter how often the widget runs. Writes are accepted and dropped.
#[derive(Debug, Clone, Copy)]
pub struct IntervalCursor {
    slot: usize,
}

impl IntervalCursor {
    pub fn at(time: SystemTime, interval: Duration) -> Self {
        let elapsed = time.duration_since(UNIX_EPOCH).unwrap_or_default();
        let interval = interval.as_secs().max(1);
        Self {
            slot: (elapsed.as_secs() / interval) as usize,
        }
    }

    pub fn now(interval: Duration) -> Self {
        Self::at(SystemTime::now(), interval)
    }
}

impl CursorStore for IntervalCursor {
    fn read(&self) -> Option<i64> {
        Some(self.slot as i64)
    }

    fn write(&mut self, _cursor: usize) -> Result<()> {
        Ok(())
    }
}

/// The page handed back by [`RotatingSelector::select`].
#[derive(Debug)]
pub struct Page<'a, T> {
    pub items: Vec<&'a T>,
    /// Catalog index the page starts at
    pub start: usize,
    /// Cursor written back for the next run; `None` for an empty catalog
    pub next: Option<usize>,
    /// Set when the cursor could not be persisted. The page itself is still valid.
    pub write_error: Option<StrikerError>,
}

impl<'a, T> Page<'a, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }
}

/// Hands out pages of at most `page_size` items, one cursor step per call.
#[derive(Debug, Clone, Copy)]
pub struct RotatingSelector {
    page_size: usize,
}

impl RotatingSelector {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn select<'a, T, S>(&self, catalog: &'a [T], store: &mut S) -> Page<'a, T>
    where
        S: CursorStore + ?Sized,
    {
        let total = catalog.len();
        if total == 0 {
            return Page {
                items: Vec::new(),
                start: 0,
                next: None,
                write_error: None,
            };
        }

        let start = store.read().unwrap_or(0).rem_euclid(total as i64) as usize;
        let items: Vec<&T> = catalog[start..]
            .iter()
            .chain(catalog[..start].iter())
            .take(self.page_size)
            .collect();

        let next = (start + 1) % total;
        let write_error = match store.write(next) {
            Ok(()) => None,
            Err(e) => {
                warn!("Failed to persist rotation cursor {}: {}", next, e);
                Some(e)
            }
        };

        Page {
            items,
            start,
            next: Some(next),
            write_error,
        }
    }
}

/// Convenience wrapper around [`RotatingSelector::select`].
pub fn select_page<'a, T, S>(catalog: &'a [T], store: &mut S, page_size: usize) -> Page<'a, T>
where
    S: CursorStore + ?Sized,
{
    RotatingSelector::new(page_size).select(catalog, store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn owned<T: Clone>(page: &Page<'_, T>) -> Vec<T> {
        page.iter().cloned().collect()
    }

    #[test]
    fn test_three_items_page_of_two() {
        let catalog = vec!["A", "B", "C"];
        let mut store = MemoryCursorStore::new();

        let expected = [
            (vec!["A", "B"], 1),
            (vec!["B", "C"], 2),
            (vec!["C", "A"], 0),
            (vec!["A", "B"], 1),
        ];

        for (page_items, cursor) in expected {
            let page = select_page(&catalog, &mut store, 2);
            assert_eq!(owned(&page), page_items);
            assert_eq!(store.cursor(), Some(cursor));
        }
    }

    #[test]
    fn test_full_cycle_visits_every_item_once() {
        let catalog: Vec<u32> = (0..7).collect();
        let mut store = MemoryCursorStore::new();

        let visited: Vec<u32> = (0..catalog.len())
            .map(|_| *select_page(&catalog, &mut store, 1).items[0])
            .collect();

        assert_eq!(visited, catalog);
    }

    #[test]
    fn test_period_equals_catalog_length() {
        let catalog = vec!["vega", "deneb", "altair", "polaris"];
        let mut store = MemoryCursorStore::new();

        let first = owned(&select_page(&catalog, &mut store, 3));
        for _ in 1..catalog.len() {
            select_page(&catalog, &mut store, 3);
        }
        let again = owned(&select_page(&catalog, &mut store, 3));

        assert_eq!(first, again);
    }

    #[test]
    fn test_page_larger_than_catalog_is_whole_rotation() {
        let catalog = vec![1, 2, 3];
        let mut store = MemoryCursorStore::with_cursor(1);

        let page = select_page(&catalog, &mut store, 10);

        assert_eq!(owned(&page), vec![2, 3, 1]);
        assert_eq!(page.start, 1);
        assert_eq!(store.cursor(), Some(2));
    }

    #[test]
    fn test_empty_catalog_does_not_write() {
        let catalog: Vec<&str> = Vec::new();
        let mut store = MemoryCursorStore::new();

        let page = select_page(&catalog, &mut store, 4);

        assert!(page.is_empty());
        assert_eq!(page.next, None);
        assert_eq!(store.writes(), 0);
        assert_eq!(store.cursor(), None);
    }

    #[test]
    fn test_stale_cursor_wraps() {
        let catalog = vec!["a", "b", "c"];
        let mut store = MemoryCursorStore::with_cursor(11);

        let page = select_page(&catalog, &mut store, 1);

        assert_eq!(owned(&page), vec!["c"]);
        assert_eq!(store.cursor(), Some(0));
    }

    #[test]
    fn test_zero_page_size_behaves_like_one() {
        let selector = RotatingSelector::new(0);
        assert_eq!(selector.page_size(), 1);

        let catalog = vec!["x", "y"];
        let mut store = MemoryCursorStore::new();
        assert_eq!(selector.select(&catalog, &mut store).len(), 1);
    }

    #[test]
    fn test_write_failure_is_reported_with_page() {
        let catalog = vec!["a", "b"];
        let mut store = MemoryCursorStore::failing();

        let page = select_page(&catalog, &mut store, 1);

        assert_eq!(owned(&page), vec!["a"]);
        assert!(page.write_error.is_some());
        // Next run rereads the old cursor and repeats the page
        let page = select_page(&catalog, &mut store, 1);
        assert_eq!(owned(&page), vec!["a"]);
    }

    #[test]
    fn test_file_store_missing_and_corrupt_read_as_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("star-toggle.txt");
        let store = FileCursorStore::new(&path);
        assert_eq!(store.read(), None);

        fs::write(&path, "abc").unwrap();
        assert_eq!(store.read(), None);

        fs::write(&path, "2.5").unwrap();
        assert_eq!(store.read(), None);

        fs::write(&path, "-2").unwrap();
        assert_eq!(store.read(), Some(-2));

        fs::write(&path, " 5\n").unwrap();
        assert_eq!(store.read(), Some(5));
    }

    #[test]
    fn test_file_store_creates_parent_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cache").join("exoplanet-toggle.txt");
        let mut store = FileCursorStore::new(&path);

        store.write(3).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "3");
        assert_eq!(store.read(), Some(3));
    }

    #[test]
    fn test_interval_cursor_moves_once_per_interval() {
        let interval = Duration::from_secs(180);
        let base = UNIX_EPOCH + Duration::from_secs(180 * 40);

        let a = IntervalCursor::at(base, interval);
        let b = IntervalCursor::at(base + Duration::from_secs(179), interval);
        let c = IntervalCursor::at(base + Duration::from_secs(180), interval);

        assert_eq!(a.read(), Some(40));
        assert_eq!(b.read(), Some(40));
        assert_eq!(c.read(), Some(41));
    }

    #[test]
    fn test_interval_cursor_ignores_writes() {
        let catalog = vec!["KJFK", "KLAX", "KORD"];
        let mut cursor = IntervalCursor::at(
            UNIX_EPOCH + Duration::from_secs(60 * 4),
            Duration::from_secs(60),
        );

        let first = owned(&select_page(&catalog, &mut cursor, 2));
        let second = owned(&select_page(&catalog, &mut cursor, 2));

        assert_eq!(first, vec!["KLAX", "KORD"]);
        assert_eq!(first, second);
    }
}
