use super::support::{RecordingReporter, ScriptedRunner};
use std::time::Duration;
use wifipass::core::{Diagnostic, NetworkInfoQuery, Password, QueryConfig, QueryState};
use wifipass::platform::{detect_from, PlatformKind};
use wifipass::{ExecutionError, WifiError};

const NETSH_INTERFACES: &str = "
There is 1 interface on the system:

    Name                   : Wi-Fi
    State                  : connected
    SSID                   : MyHomeNet
    BSSID                  : 6c:5a:b0:12:34:56
";

const NETSH_PROFILE: &str = "
Security settings
-----------------
    Authentication         : WPA2-Personal
    Key Content            : Sup3rSecret!
";

#[test]
fn test_windows_lookup_end_to_end() {
    let runner = ScriptedRunner::new()
        .then_output(NETSH_INTERFACES)
        .then_output(NETSH_PROFILE);
    let reporter = RecordingReporter::default();

    let mut query =
        NetworkInfoQuery::new(PlatformKind::Windows, QueryConfig::default(), &runner, &reporter);
    let info = query.run(true);

    assert_eq!(info.platform, PlatformKind::Windows);
    assert_eq!(info.network_name.as_deref(), Some("MyHomeNet"));
    assert_eq!(info.password, Some(Password::Secret("Sup3rSecret!".to_string())));
    assert_eq!(query.state(), QueryState::Complete);

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].tokens(), ["netsh", "wlan", "show", "interfaces"]);
    assert_eq!(
        calls[1].tokens(),
        ["netsh", "wlan", "show", "profile", "MyHomeNet", "key=clear"]
    );
    assert_eq!(runner.timeouts(), vec![Duration::from_secs(15); 2]);
}

#[test]
fn test_macos_lookup_end_to_end() {
    let runner = ScriptedRunner::new()
        .then_output("Current Wi-Fi Network: Office5G\n")
        .then_output("mypassword123\n");
    let reporter = RecordingReporter::default();
    let config = QueryConfig::default()
        .with_interface("en1")
        .with_timeout(Duration::from_secs(5));

    let mut query = NetworkInfoQuery::new(PlatformKind::MacOS, config, &runner, &reporter);
    let info = query.run(true);

    assert_eq!(info.network_name.as_deref(), Some("Office5G"));
    assert_eq!(info.password, Some(Password::Secret("mypassword123".to_string())));

    let calls = runner.calls();
    assert_eq!(calls[0].tokens(), ["networksetup", "-getairportnetwork", "en1"]);
    assert_eq!(
        calls[1].tokens(),
        ["security", "find-generic-password", "-wa", "Office5G"]
    );
    assert_eq!(runner.timeouts(), vec![Duration::from_secs(5); 2]);
    assert_eq!(
        reporter.diagnostics(),
        vec![Diagnostic::NameResolved("Office5G".to_string())]
    );
}

#[test]
fn test_unsupported_platform_runs_nothing() {
    let runner = ScriptedRunner::new();
    let reporter = RecordingReporter::default();
    let platform = detect_from("Linux", &reporter);

    let mut query = NetworkInfoQuery::new(platform, QueryConfig::default(), &runner, &reporter);
    let info = query.run(true);

    assert_eq!(info.platform, PlatformKind::Unsupported);
    assert_eq!(info.network_name, None);
    assert_eq!(info.password, None);
    assert_eq!(query.state(), QueryState::Failed);
    assert!(runner.calls().is_empty());
    assert_eq!(
        reporter.diagnostics(),
        vec![Diagnostic::UnsupportedPlatform("Linux".to_string())]
    );
}

#[test]
fn test_timeout_during_name_skips_password() {
    let timeout = Duration::from_secs(15);
    let runner = ScriptedRunner::new()
        .then_error(ExecutionError::Timeout(timeout))
        .then_output(NETSH_PROFILE);
    let reporter = RecordingReporter::default();

    let mut query =
        NetworkInfoQuery::new(PlatformKind::Windows, QueryConfig::default(), &runner, &reporter);
    let info = query.run(true);

    assert_eq!(info.network_name, None);
    assert_eq!(info.password, None);
    assert_eq!(query.state(), QueryState::Failed);
    assert_eq!(runner.calls().len(), 1);
    assert_eq!(
        reporter.diagnostics(),
        vec![Diagnostic::Timeout(timeout), Diagnostic::NoNetwork]
    );
}

#[test]
fn test_resolve_name_surfaces_timeout() {
    let timeout = Duration::from_secs(2);
    let runner = ScriptedRunner::new().then_error(ExecutionError::Timeout(timeout));
    let reporter = RecordingReporter::default();

    let mut query =
        NetworkInfoQuery::new(PlatformKind::MacOS, QueryConfig::default(), &runner, &reporter);
    assert_eq!(query.resolve_name(), Err(WifiError::ExecutionTimeout(timeout)));
    assert_eq!(query.state(), QueryState::Failed);
}

#[test]
fn test_no_ssid_line_means_no_network() {
    let runner = ScriptedRunner::new()
        .then_output("There is no wireless interface on the system.\n");
    let reporter = RecordingReporter::default();

    let mut query =
        NetworkInfoQuery::new(PlatformKind::Windows, QueryConfig::default(), &runner, &reporter);
    let info = query.run(true);

    assert_eq!(info.network_name, None);
    assert_eq!(runner.calls().len(), 1);
    assert_eq!(query.state(), QueryState::Failed);
    assert_eq!(reporter.diagnostics(), vec![Diagnostic::NoNetwork]);
}

#[test]
fn test_blank_name_never_executes() {
    let runner = ScriptedRunner::new();
    let reporter = RecordingReporter::default();

    let mut query =
        NetworkInfoQuery::new(PlatformKind::MacOS, QueryConfig::default(), &runner, &reporter);
    assert_eq!(
        query.resolve_password(""),
        Err(WifiError::FieldNotFound("network name"))
    );
    assert_eq!(
        query.resolve_password("   "),
        Err(WifiError::FieldNotFound("network name"))
    );
    assert!(runner.calls().is_empty());
}

#[test]
fn test_missing_key_content_is_sentinel() {
    let runner = ScriptedRunner::new()
        .then_output(NETSH_INTERFACES)
        .then_output("Security settings\n    Security key : Absent\n");
    let reporter = RecordingReporter::default();

    let mut query =
        NetworkInfoQuery::new(PlatformKind::Windows, QueryConfig::default(), &runner, &reporter);
    let info = query.run(true);

    assert_eq!(info.network_name.as_deref(), Some("MyHomeNet"));
    assert_eq!(info.password, Some(Password::NoPassword));
    assert_eq!(query.state(), QueryState::Complete);
    assert!(reporter.diagnostics().contains(&Diagnostic::NoPassword));
}

#[test]
fn test_password_command_failure_keeps_name() {
    let failure = "`security` exited with exit status: 44: security: SecKeychainSearchCopyNext: \
                   The specified item could not be found in the keychain.";
    let runner = ScriptedRunner::new()
        .then_output("Current Wi-Fi Network: Office5G")
        .then_error(ExecutionError::CommandFailed(failure.to_string()));
    let reporter = RecordingReporter::default();

    let mut query =
        NetworkInfoQuery::new(PlatformKind::MacOS, QueryConfig::default(), &runner, &reporter);
    let info = query.run(true);

    assert_eq!(info.network_name.as_deref(), Some("Office5G"));
    assert_eq!(info.password, None);
    assert_eq!(query.state(), QueryState::Failed);
    assert!(reporter
        .diagnostics()
        .contains(&Diagnostic::CommandFailed(failure.to_string())));
}

#[test]
fn test_privilege_hint_does_not_change_error() {
    let msg = "`netsh` exited with exit code: 1: Access is denied.";
    let runner = ScriptedRunner::new().then_error(ExecutionError::CommandFailed(msg.to_string()));
    let reporter = RecordingReporter::default();

    let mut query =
        NetworkInfoQuery::new(PlatformKind::Windows, QueryConfig::default(), &runner, &reporter);
    assert_eq!(
        query.resolve_name(),
        Err(WifiError::ExecutionFailed(msg.to_string()))
    );
    assert_eq!(
        reporter.diagnostics(),
        vec![
            Diagnostic::PrivilegeRequired(msg.to_string()),
            Diagnostic::NoNetwork
        ]
    );
}

#[test]
fn test_name_only_skips_password() {
    let runner = ScriptedRunner::new().then_output(NETSH_INTERFACES);
    let reporter = RecordingReporter::default();

    let mut query =
        NetworkInfoQuery::new(PlatformKind::Windows, QueryConfig::default(), &runner, &reporter);
    let info = query.run(false);

    assert_eq!(info.network_name.as_deref(), Some("MyHomeNet"));
    assert_eq!(info.password, None);
    assert_eq!(query.state(), QueryState::Complete);
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn test_unexpected_error_is_reported() {
    let runner = ScriptedRunner::new()
        .then_error(ExecutionError::Unexpected("Failed to start netsh: not found".into()));
    let reporter = RecordingReporter::default();

    let mut query =
        NetworkInfoQuery::new(PlatformKind::Windows, QueryConfig::default(), &runner, &reporter);
    assert_eq!(
        query.resolve_name(),
        Err(WifiError::ExecutionUnexpected("Failed to start netsh: not found".into()))
    );
    assert_eq!(
        reporter.diagnostics()[0],
        Diagnostic::Unexpected("Failed to start netsh: not found".into())
    );
}
