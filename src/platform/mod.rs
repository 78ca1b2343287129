// Platform-specific code module

pub mod commands;
pub mod detect;
pub mod exec;

// Re-exports for clean imports
pub use commands::{current_network, password_lookup, CommandSpec};
pub use detect::{detect, detect_from, host_identifier, PlatformKind};
pub use exec::{execute, CommandRunner, SystemCommandRunner, DEFAULT_TIMEOUT};
