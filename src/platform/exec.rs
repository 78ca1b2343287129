use super::commands::CommandSpec;
use crate::error::ExecutionError;
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

type PipeOutput = std::io::Result<Vec<u8>>;

/// Default wall-clock limit for one invocation
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

const POLL_INTERVAL_MS: u64 = 50;

/// Runs external commands and returns their merged output
pub trait CommandRunner {
    fn execute(&self, command: &CommandSpec, timeout: Duration) -> Result<String, ExecutionError>;
}

/// Spawns real processes through `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn execute(&self, command: &CommandSpec, timeout: Duration) -> Result<String, ExecutionError> {
        execute(command, timeout)
    }
}

/// Run `command`, wait at most `timeout`, and return stdout followed by stderr
pub fn execute(command: &CommandSpec, timeout: Duration) -> Result<String, ExecutionError> {
    log::debug!(
        "Running {} with {} argument(s)",
        command.program(),
        command.args().len()
    );

    let deadline = Instant::now() + timeout;
    let mut process = Command::new(command.program());
    process
        .args(command.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        process.creation_flags(0x08000000); // CREATE_NO_WINDOW
    }

    let mut child = process.spawn().map_err(|e| {
        ExecutionError::Unexpected(format!("Failed to start {}: {}", command.program(), e))
    })?;

    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = match wait_with_deadline(&mut child, deadline) {
        Ok(Some(status)) => status,
        Ok(None) => {
            // Readers are left detached; the pipes close once the child is gone
            let _ = child.kill();
            let _ = child.wait();
            return Err(ExecutionError::Timeout(timeout));
        }
        Err(e) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(ExecutionError::Unexpected(format!(
                "Failed to wait for {}: {}",
                command.program(),
                e
            )));
        }
    };

    // Background processes started by the child can hold the pipes open
    // after it exits, so reading is bounded by the same deadline
    let mut merged = collect(stdout, deadline, timeout, command.program())?;
    merged.extend(collect(stderr, deadline, timeout, command.program())?);
    let text = decode_lossy(&merged);

    if !status.success() {
        return Err(ExecutionError::CommandFailed(format!(
            "`{}` exited with {}: {}",
            command.program(),
            status,
            text.trim()
        )));
    }

    Ok(text)
}

/// Poll the child until it exits or the deadline passes (`Ok(None)`)
fn wait_with_deadline(
    child: &mut Child,
    deadline: Instant,
) -> std::io::Result<Option<std::process::ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(None);
        }
        thread::sleep(Duration::from_millis(POLL_INTERVAL_MS).min(remaining));
    }
}

/// Read a pipe to the end on its own thread, delivering the bytes over a channel
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<Receiver<PipeOutput>> {
    pipe.map(|mut reader| {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut buf = Vec::new();
            let result = reader.read_to_end(&mut buf).map(|_| buf);
            // The receiver is gone once the deadline has passed
            let _ = tx.send(result);
        });
        rx
    })
}

fn collect(
    output: Option<Receiver<PipeOutput>>,
    deadline: Instant,
    timeout: Duration,
    program: &str,
) -> Result<Vec<u8>, ExecutionError> {
    let Some(output) = output else {
        return Ok(Vec::new());
    };
    match output.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(result) => result.map_err(|e| {
            ExecutionError::Unexpected(format!("Failed to read output of {}: {}", program, e))
        }),
        Err(RecvTimeoutError::Timeout) => Err(ExecutionError::Timeout(timeout)),
        Err(RecvTimeoutError::Disconnected) => Err(ExecutionError::Unexpected(format!(
            "Output reader for {} stopped",
            program
        ))),
    }
}

/// Decode bytes as UTF-8, dropping invalid sequences instead of replacing them
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
