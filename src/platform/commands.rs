// Command templates for each supported platform

use super::detect::PlatformKind;

/// One external invocation: program name followed by its arguments.
///
/// Arguments are handed to the OS as-is, never joined into a shell string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    tokens: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = vec![program.to_string()];
        tokens.extend(args.into_iter().map(Into::into));
        Self { tokens }
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Command that reports the currently connected network.
///
/// `None` for unsupported platforms.
pub fn current_network(platform: PlatformKind, macos_interface: &str) -> Option<CommandSpec> {
    match platform {
        PlatformKind::Windows => Some(CommandSpec::new(
            "netsh",
            ["wlan", "show", "interfaces"],
        )),
        PlatformKind::MacOS => Some(CommandSpec::new(
            "networksetup",
            ["-getairportnetwork", macos_interface],
        )),
        PlatformKind::Unsupported => None,
    }
}

/// Command that prints the stored secret for `network_name`.
///
/// `None` for unsupported platforms or an empty name.
pub fn password_lookup(platform: PlatformKind, network_name: &str) -> Option<CommandSpec> {
    if network_name.is_empty() {
        return None;
    }

    match platform {
        PlatformKind::Windows => Some(CommandSpec::new(
            "netsh",
            ["wlan", "show", "profile", network_name, "key=clear"],
        )),
        PlatformKind::MacOS => Some(CommandSpec::new(
            "security",
            ["find-generic-password", "-wa", network_name],
        )),
        PlatformKind::Unsupported => None,
    }
}
