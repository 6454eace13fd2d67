//! Shared helpers for integration tests.
#![allow(dead_code, clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use provision_cli::exec::{ExecError, ExecResult, Runner};

/// One scripted response for [`ScriptedRunner`].
#[derive(Debug, Clone)]
pub enum Response {
    /// The command "completes" with the given streams.
    Output {
        stdout: &'static str,
        stderr: &'static str,
    },
    /// The command "times out".
    Timeout,
}

/// A [`Runner`] that plays back scripted responses and records every
/// command line it receives. Once the script is exhausted, every further
/// command succeeds with empty output.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    script: Mutex<VecDeque<Response>>,
    commands: Mutex<Vec<String>>,
    pub which_result: bool,
}

impl ScriptedRunner {
    /// A runner where every command succeeds silently and every `which`
    /// probe finds its program.
    pub fn ok() -> Self {
        Self {
            which_result: true,
            ..Self::default()
        }
    }

    /// A runner that plays the given responses in order.
    pub fn with_script(script: Vec<Response>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            which_result: true,
            ..Self::default()
        }
    }

    /// Every command line passed to this runner, in order.
    pub fn recorded_commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl Runner for ScriptedRunner {
    fn run_with_timeout(&self, command: &str, limit: Duration) -> Result<ExecResult, ExecError> {
        self.commands.lock().unwrap().push(command.to_string());
        match self.script.lock().unwrap().pop_front() {
            None => Ok(ExecResult {
                stdout: String::new(),
                stderr: String::new(),
            }),
            Some(Response::Output { stdout, stderr }) => Ok(ExecResult {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            }),
            Some(Response::Timeout) => Err(ExecError::Timeout {
                command: command.to_string(),
                limit,
            }),
        }
    }

    fn which(&self, _program: &str) -> bool {
        self.which_result
    }
}
