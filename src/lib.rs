// wifipass library - public API

// Re-export error types
pub mod error;
pub use error::{ExecutionError, Result, WifiError};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{NetworkInfo, NetworkInfoQuery, Password, QueryConfig};
pub use crate::platform::PlatformKind;

// Initialize logging
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
