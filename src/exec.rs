//! Shell command execution with captured output and a hard timeout.
//!
//! Commands are run through `sh -c` because installer steps use shell
//! features (pipes, `&&`, command substitution). Both output streams are
//! captured and returned to the caller regardless of exit code; callers
//! treat unexplained stderr text as the failure signal.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Default per-command deadline. Package installs can legitimately take
/// minutes on a slow mirror.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Interval between `try_wait` polls while waiting on a child.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Captured output of a completed command.
///
/// The exit status is deliberately absent: installer sequences decide
/// success from stderr content, not from exit codes.
#[derive(Debug)]
pub struct ExecResult {
    /// Captured standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// Captured standard error, lossily decoded as UTF-8.
    pub stderr: String,
}

/// Failure to run a command to completion.
#[derive(Error, Debug)]
pub enum ExecError {
    /// The subordinate shell could not be started.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        /// The command line that failed to start.
        command: String,
        /// Underlying I/O error from process creation.
        #[source]
        source: std::io::Error,
    },

    /// The command exceeded its deadline and was killed.
    #[error("`{command}` did not finish within {}s and was killed", limit.as_secs())]
    Timeout {
        /// The command line that was killed.
        command: String,
        /// The deadline that was exceeded.
        limit: Duration,
    },

    /// Waiting on the child or collecting its output failed.
    #[error("failed to collect output of `{command}`: {source}")]
    Wait {
        /// The command line being waited on.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Abstraction over command execution, the seam for installer tests.
pub trait Runner: Send + Sync {
    /// Run a shell command with an explicit deadline.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Spawn`] if the shell cannot be started,
    /// [`ExecError::Timeout`] if the deadline passes before the command
    /// exits, and [`ExecError::Wait`] if output collection fails.
    fn run_with_timeout(&self, command: &str, limit: Duration) -> Result<ExecResult, ExecError>;

    /// Run a shell command with the default deadline.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Runner::run_with_timeout`].
    fn run(&self, command: &str) -> Result<ExecResult, ExecError> {
        self.run_with_timeout(command, DEFAULT_TIMEOUT)
    }

    /// Check if a program is available on PATH.
    fn which(&self, program: &str) -> bool;
}

/// [`Runner`] backed by a real `sh -c` subprocess.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl Runner for ShellRunner {
    fn run_with_timeout(&self, command: &str, limit: Duration) -> Result<ExecResult, ExecError> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ExecError::Spawn {
                command: command.to_string(),
                source,
            })?;

        // Drain both pipes on threads so a chatty child cannot fill a pipe
        // buffer and stall before we ever observe its exit.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let deadline = Instant::now() + limit;
        loop {
            match child.try_wait() {
                // Exit status intentionally not inspected; stderr content is
                // the failure signal used by callers.
                Ok(Some(_status)) => break,
                Ok(None) => {
                    if Instant::now() >= deadline {
                        child.kill().ok();
                        child.wait().ok();
                        return Err(ExecError::Timeout {
                            command: command.to_string(),
                            limit,
                        });
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
                Err(source) => {
                    child.kill().ok();
                    return Err(ExecError::Wait {
                        command: command.to_string(),
                        source,
                    });
                }
            }
        }

        Ok(ExecResult {
            stdout: join_output(stdout, command)?,
            stderr: join_output(stderr, command)?,
        })
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// Read a child output stream to EOF on a dedicated thread.
fn drain<R: Read + Send + 'static>(stream: Option<R>) -> JoinHandle<std::io::Result<Vec<u8>>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut stream) = stream {
            stream.read_to_end(&mut buf)?;
        }
        Ok(buf)
    })
}

/// Collect the bytes gathered by a [`drain`] thread into a lossy string.
fn join_output(
    handle: JoinHandle<std::io::Result<Vec<u8>>>,
    command: &str,
) -> Result<String, ExecError> {
    let bytes = handle
        .join()
        .unwrap_or_else(|_| Err(std::io::Error::other("output reader thread panicked")))
        .map_err(|source| ExecError::Wait {
            command: command.to_string(),
            source,
        })?;
    Ok(String::from_utf8_lossy(&bytes).to_string())
}
