use crate::platform::DEFAULT_TIMEOUT;
use std::time::Duration;

/// Wi-Fi device queried by `networksetup` on macOS
pub const DEFAULT_MACOS_INTERFACE: &str = "en0";

/// Settings for one network lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Wall-clock limit for each external command
    pub timeout: Duration,
    pub macos_interface: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            macos_interface: DEFAULT_MACOS_INTERFACE.to_string(),
        }
    }
}

impl QueryConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Blank names are ignored and keep the current interface
    pub fn with_interface<S: Into<String>>(mut self, interface: S) -> Self {
        let interface = interface.into();
        let trimmed = interface.trim();
        if !trimmed.is_empty() {
            self.macos_interface = trimmed.to_string();
        }
        self
    }
}
