// Markup and formatting module

pub mod formatters;
pub mod markup;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_grouped, format_grouped_width, format_size, wrap_text};
