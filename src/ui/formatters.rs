use super::messages;
use crate::core::NetworkInfo;

/// Horizontal rule framing the report
pub fn rule() -> String {
    "=".repeat(messages::RULE_WIDTH)
}

/// Password text for display; a missing or empty secret reads as not retrieved
pub fn format_password(info: &NetworkInfo) -> &str {
    info.password
        .as_ref()
        .and_then(|password| password.secret())
        .unwrap_or(messages::NO_PASSWORD)
}

/// Body lines of the report, without the surrounding rules
pub fn format_network_info(info: &NetworkInfo, include_password: bool) -> Vec<String> {
    if !info.platform.is_supported() {
        return vec![messages::UNSUPPORTED.to_string()];
    }

    let Some(name) = info.network_name.as_deref() else {
        return vec![messages::NO_WIFI.to_string()];
    };

    let mut lines = vec![format!("{} {}", messages::CONNECTED_LABEL, name)];
    if include_password {
        lines.push(format!("{} {}", messages::PASSWORD_LABEL, format_password(info)));
    }
    lines
}
