use std::time::Duration;
use wifipass::platform::{CommandRunner, CommandSpec, SystemCommandRunner};
use wifipass::ExecutionError;

#[test]
fn test_missing_program_is_unexpected() {
    let cmd = CommandSpec::new("wifipass-missing-tool", ["--help"]);
    let result = SystemCommandRunner.execute(&cmd, Duration::from_secs(5));
    match result {
        Err(ExecutionError::Unexpected(msg)) => assert!(msg.contains("wifipass-missing-tool")),
        other => panic!("expected Unexpected, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_invalid_utf8_is_dropped() {
    let cmd = CommandSpec::new("printf", ["SSID : Caf\\377e\\n"]);
    let output = SystemCommandRunner
        .execute(&cmd, Duration::from_secs(5))
        .unwrap();
    assert_eq!(output, "SSID : Cafe\n");
}

#[cfg(unix)]
#[test]
fn test_error_output_is_captured_on_failure() {
    let cmd = CommandSpec::new(
        "sh",
        ["-c", "echo 'security: SecKeychainSearchCopyNext: not found' 1>&2; exit 44"],
    );
    match SystemCommandRunner.execute(&cmd, Duration::from_secs(5)) {
        Err(err @ ExecutionError::CommandFailed(_)) => {
            assert!(err.to_string().contains("SecKeychainSearchCopyNext"));
            assert!(!err.needs_privilege());
        }
        other => panic!("expected CommandFailed, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_slow_command_times_out() {
    let timeout = Duration::from_millis(300);
    let cmd = CommandSpec::new("sh", ["-c", "sleep 10; echo late"]);
    assert_eq!(
        SystemCommandRunner.execute(&cmd, timeout),
        Err(ExecutionError::Timeout(timeout))
    );
}

#[cfg(unix)]
#[test]
fn test_large_output_does_not_block() {
    // Larger than a pipe buffer on every common platform
    let cmd = CommandSpec::new("sh", ["-c", "yes SSID | head -n 100000"]);
    let output = SystemCommandRunner
        .execute(&cmd, Duration::from_secs(10))
        .unwrap();
    assert_eq!(output.lines().count(), 100000);
}

#[cfg(unix)]
#[test]
fn test_background_process_holding_pipes_times_out() {
    let timeout = Duration::from_secs(1);
    let cmd = CommandSpec::new("sh", ["-c", "sleep 5 & echo SSID : Net"]);
    let start = std::time::Instant::now();
    let result = SystemCommandRunner.execute(&cmd, timeout);
    assert!(start.elapsed() < Duration::from_secs(3));
    assert_eq!(result, Err(ExecutionError::Timeout(timeout)));
}
