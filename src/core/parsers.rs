//! Field extraction from the free-form text printed by `netsh`,
//! `networksetup` and `security`.
//!
//! Output formats drift between OS versions and locales, so matching is
//! loose: lines are trimmed, keywords are matched case-insensitively as
//! substrings, and the first usable line wins. A value is whatever follows
//! the first colon on that line, so colons inside the value survive.

use serde::{Serialize, Serializer};
use std::fmt;

/// Text used when a network has no stored secret
pub const NO_PASSWORD: &str = "no password";

/// Result of a successful password lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Password {
    Secret(String),
    /// The lookup ran but the output carried no secret
    NoPassword,
}

impl Password {
    pub fn as_str(&self) -> &str {
        match self {
            Password::Secret(secret) => secret.as_str(),
            Password::NoPassword => NO_PASSWORD,
        }
    }

    pub fn secret(&self) -> Option<&str> {
        match self {
            Password::Secret(secret) => Some(secret.as_str()),
            Password::NoPassword => None,
        }
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Password {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// First non-empty value after the first colon on a line selected by `is_match`.
///
/// `is_match` sees the trimmed line lowercased.
fn first_value<F>(output: &str, is_match: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    output
        .lines()
        .map(str::trim)
        .filter(|line| is_match(&line.to_lowercase()))
        .filter_map(|line| line.split_once(':'))
        .map(|(_, value)| value.trim())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// Network name from `netsh wlan show interfaces`
pub fn windows_network_name(output: &str) -> Option<String> {
    first_value(output, |line| line.contains("ssid") && line.contains(':'))
}

/// Network name from `networksetup -getairportnetwork <iface>`
pub fn macos_network_name(output: &str) -> Option<String> {
    first_value(output, |line| line.contains("current wi-fi network:"))
}

/// Secret from `netsh wlan show profile <name> key=clear`
pub fn windows_password(output: &str) -> Password {
    first_value(output, |line| line.contains("key content") && line.contains(':'))
        .map_or(Password::NoPassword, Password::Secret)
}

/// Secret from `security find-generic-password -wa <name>`.
///
/// `security` prints the bare password on its own line; its own complaints
/// are prefixed with `security:`. Any other leading line is taken as the
/// password.
pub fn macos_password(output: &str) -> Password {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("security:"))
        .map_or(Password::NoPassword, |line| Password::Secret(line.to_string()))
}
