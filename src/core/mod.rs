// Core logic module

pub mod astronomy;
pub mod catalog;
pub mod config;
pub mod geo;
pub mod rotation;
pub mod sky;
pub mod spectral;
pub mod system_info;
pub mod units;
pub mod weather;

// Re-export commonly used items
pub use catalog::Catalog;
pub use config::{Config, DataPaths};
pub use rotation::{
    select_page, CursorStore, FileCursorStore, IntervalCursor, MemoryCursorStore, Page,
    RotatingSelector,
};
