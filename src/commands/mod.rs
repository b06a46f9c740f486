// Command handlers module
pub mod airports;
pub mod config;
pub mod cpu;
pub mod definitions;
pub mod disks;
pub mod exoplanets;
pub mod gpu;
pub mod memory;
pub mod network;
pub mod planets;
pub mod stars;
pub mod sun;
pub mod system;

use crate::ui::markup;
use log::error;

/// Widget body, or its failure as a single red line
pub fn render_or_report(body: anyhow::Result<String>) -> String {
    match body {
        Ok(markup) => markup,
        Err(e) => {
            error!("{:#}", e);
            markup::error_line(&format!("{:#}", e))
        }
    }
}

/// Print a widget's title followed by its body.
///
/// Conky shows whatever lands on stdout, so errors are rendered rather than
/// returned.
pub fn print_widget(title: &str, body: anyhow::Result<String>) {
    println!("{}", title);
    println!("{}", render_or_report(body));
}
