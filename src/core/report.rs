use crate::ui::messages;
use std::time::Duration;

/// Something worth telling the user about while a lookup runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    UnsupportedPlatform(String),
    PrivilegeRequired(String),
    CommandFailed(String),
    Timeout(Duration),
    Unexpected(String),
    NameResolved(String),
    NoNetwork,
    NoPassword,
}

/// Sink for diagnostics emitted by the detector and the query.
///
/// Injected so callers decide where messages go. The CLI forwards them to
/// the `log` facade; tests collect them.
pub trait Reporter {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::UnsupportedPlatform(id) => {
                log::warn!("Unsupported operating system: {}", id)
            }
            Diagnostic::PrivilegeRequired(msg) => {
                log::warn!("{}", messages::PERMISSION_ERROR);
                log::debug!("{}", msg);
            }
            Diagnostic::CommandFailed(msg) => log::warn!("Command execution error: {}", msg),
            Diagnostic::Timeout(after) => log::warn!("Command timed out after {:?}", after),
            Diagnostic::Unexpected(msg) => log::warn!("Unexpected error: {}", msg),
            // The name is shown by the front end; keep it out of default logs
            Diagnostic::NameResolved(_) => log::debug!("Active network resolved"),
            Diagnostic::NoNetwork => log::debug!("{}", messages::NO_WIFI),
            Diagnostic::NoPassword => log::debug!("No stored password for the active network"),
        }
    }
}
