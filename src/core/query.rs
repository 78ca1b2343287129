use crate::core::config::QueryConfig;
use crate::core::parsers::{self, Password};
use crate::core::report::{Diagnostic, Reporter};
use crate::error::{ExecutionError, Result, WifiError};
use crate::platform::{commands, CommandRunner, PlatformKind};
use serde::Serialize;

/// Where a query currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    Idle,
    NameResolved,
    Complete,
    Failed,
}

/// Structured outcome handed to the front end.
///
/// `password` is `None` when the lookup was skipped or failed, and
/// `Some(Password::NoPassword)` when it ran but found no secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    pub platform: PlatformKind,
    pub network_name: Option<String>,
    pub password: Option<Password>,
}

impl NetworkInfo {
    fn empty(platform: PlatformKind) -> Self {
        Self {
            platform,
            network_name: None,
            password: None,
        }
    }
}

/// Looks up the active network name and then its stored password
pub struct NetworkInfoQuery<'a> {
    platform: PlatformKind,
    config: QueryConfig,
    runner: &'a dyn CommandRunner,
    reporter: &'a dyn Reporter,
    state: QueryState,
}

impl<'a> NetworkInfoQuery<'a> {
    pub fn new(
        platform: PlatformKind,
        config: QueryConfig,
        runner: &'a dyn CommandRunner,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            platform,
            config,
            runner,
            reporter,
            state: QueryState::Idle,
        }
    }

    pub fn state(&self) -> QueryState {
        self.state
    }

    /// Run the whole lookup. Failures are reported, never returned.
    pub fn run(&mut self, include_password: bool) -> NetworkInfo {
        let mut info = NetworkInfo::empty(self.platform);

        if !self.platform.is_supported() {
            // The detector already reported the identifier
            self.state = QueryState::Failed;
            return info;
        }

        let name = match self.resolve_name() {
            Ok(name) => name,
            Err(_) => return info,
        };
        info.network_name = Some(name.clone());

        if include_password {
            info.password = self.resolve_password(&name).ok();
        } else {
            self.state = QueryState::Complete;
        }

        info
    }

    /// Name of the network the host is connected to
    pub fn resolve_name(&mut self) -> Result<String> {
        let result = self.lookup_name();
        match &result {
            Ok(name) => {
                self.state = QueryState::NameResolved;
                self.reporter.report(Diagnostic::NameResolved(name.clone()));
            }
            Err(_) => {
                self.state = QueryState::Failed;
                self.reporter.report(Diagnostic::NoNetwork);
            }
        }
        result
    }

    /// Stored password for `network_name`.
    ///
    /// A blank name is rejected before any command runs.
    pub fn resolve_password(&mut self, network_name: &str) -> Result<Password> {
        let result = self.lookup_password(network_name.trim());
        match &result {
            Ok(password) => {
                self.state = QueryState::Complete;
                if *password == Password::NoPassword {
                    self.reporter.report(Diagnostic::NoPassword);
                }
            }
            Err(_) => self.state = QueryState::Failed,
        }
        result
    }

    fn lookup_name(&self) -> Result<String> {
        let command = commands::current_network(self.platform, &self.config.macos_interface)
            .ok_or_else(|| self.unsupported())?;
        let output = self.run_command(&command)?;

        let name = match self.platform {
            PlatformKind::Windows => parsers::windows_network_name(&output),
            PlatformKind::MacOS => parsers::macos_network_name(&output),
            PlatformKind::Unsupported => return Err(self.unsupported()),
        };
        name.ok_or(WifiError::FieldNotFound("network name"))
    }

    fn lookup_password(&self, network_name: &str) -> Result<Password> {
        if network_name.is_empty() {
            return Err(WifiError::FieldNotFound("network name"));
        }
        let command = commands::password_lookup(self.platform, network_name)
            .ok_or_else(|| self.unsupported())?;
        let output = self.run_command(&command)?;

        match self.platform {
            PlatformKind::Windows => Ok(parsers::windows_password(&output)),
            PlatformKind::MacOS => Ok(parsers::macos_password(&output)),
            PlatformKind::Unsupported => Err(self.unsupported()),
        }
    }

    fn run_command(&self, command: &commands::CommandSpec) -> Result<String> {
        self.runner
            .execute(command, self.config.timeout)
            .map_err(|err| {
                self.reporter.report(diagnose(&err));
                WifiError::from(err)
            })
    }

    fn unsupported(&self) -> WifiError {
        WifiError::unsupported_platform(self.platform.to_string())
    }
}

/// Diagnostic for a failed command. The privilege check only picks the wording.
fn diagnose(err: &ExecutionError) -> Diagnostic {
    match err {
        ExecutionError::Timeout(after) => Diagnostic::Timeout(*after),
        ExecutionError::CommandFailed(msg) if err.needs_privilege() => {
            Diagnostic::PrivilegeRequired(msg.clone())
        }
        ExecutionError::CommandFailed(msg) => Diagnostic::CommandFailed(msg.clone()),
        ExecutionError::Unexpected(msg) => Diagnostic::Unexpected(msg.clone()),
    }
}
