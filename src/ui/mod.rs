// UI and formatting module

pub mod display;
pub mod formatters;
pub mod messages;

// Re-export commonly used items for cleaner imports
pub use display::display_network_info;
pub use formatters::{format_network_info, format_password, rule};
