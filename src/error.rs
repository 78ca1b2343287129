use std::time::Duration;
use thiserror::Error;

/// Failure of a single external command invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("Command timed out after {0:?}")]
    Timeout(Duration),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ExecutionError {
    /// Whether the failure text hints at missing privileges.
    ///
    /// Only used to pick the wording of a diagnostic. It never changes which
    /// variant was produced.
    pub fn needs_privilege(&self) -> bool {
        match self {
            ExecutionError::CommandFailed(msg) => mentions_privilege(msg),
            ExecutionError::Timeout(_) | ExecutionError::Unexpected(_) => false,
        }
    }
}

pub(crate) fn mentions_privilege(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("access") || lower.contains("permission")
}

/// Custom error type for network lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WifiError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Command timed out after {0:?}")]
    ExecutionTimeout(Duration),

    #[error("Command failed: {0}")]
    ExecutionFailed(String),

    #[error("Unexpected error: {0}")]
    ExecutionUnexpected(String),

    #[error("Field not found: {0}")]
    FieldNotFound(&'static str),
}

impl From<ExecutionError> for WifiError {
    fn from(err: ExecutionError) -> Self {
        match err {
            ExecutionError::Timeout(after) => WifiError::ExecutionTimeout(after),
            ExecutionError::CommandFailed(msg) => WifiError::ExecutionFailed(msg),
            ExecutionError::Unexpected(msg) => WifiError::ExecutionUnexpected(msg),
        }
    }
}

/// Result type alias for wifipass
pub type Result<T> = std::result::Result<T, WifiError>;

impl WifiError {
    pub fn unsupported_platform<S: Into<String>>(id: S) -> Self {
        WifiError::UnsupportedPlatform(id.into())
    }
}
