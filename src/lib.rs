// Striker Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, StrikerError};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::rotation::{CursorStore, RotatingSelector};

/// Initialize logging on stderr; stdout carries the widget markup.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks debug over warn.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}
