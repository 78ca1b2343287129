use crate::core::report::{Diagnostic, Reporter};
use serde::Serialize;
use std::fmt;

/// Operating systems this tool knows how to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Windows,
    MacOS,
    Unsupported,
}

impl PlatformKind {
    /// Map an OS identifier ("Windows", "Darwin", ...) to a platform.
    ///
    /// Matching is exact; anything else is `Unsupported`.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "Windows" => PlatformKind::Windows,
            "Darwin" => PlatformKind::MacOS,
            _ => PlatformKind::Unsupported,
        }
    }

    pub fn is_supported(self) -> bool {
        !matches!(self, PlatformKind::Unsupported)
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformKind::Windows => "Windows",
            PlatformKind::MacOS => "macOS",
            PlatformKind::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Kernel-style name of the running OS, as `uname -s` would print it
pub fn host_identifier() -> &'static str {
    match std::env::consts::OS {
        "windows" => "Windows",
        "macos" => "Darwin",
        "linux" => "Linux",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        other => other,
    }
}

/// Detect the host platform, reporting unsupported systems through `reporter`
pub fn detect(reporter: &dyn Reporter) -> PlatformKind {
    detect_from(host_identifier(), reporter)
}

/// Detect from an explicit identifier
pub fn detect_from(identifier: &str, reporter: &dyn Reporter) -> PlatformKind {
    let platform = PlatformKind::from_identifier(identifier);
    if platform == PlatformKind::Unsupported {
        reporter.report(Diagnostic::UnsupportedPlatform(identifier.to_string()));
    }
    platform
}
