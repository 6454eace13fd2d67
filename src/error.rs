//! Domain-specific error types for the provisioning engine.
//!
//! Internal modules return typed errors ([`crate::exec::ExecError`],
//! [`StepError`], [`InstallError`]) while command handlers at the CLI
//! boundary convert them to [`anyhow::Error`] via the standard `?` operator.

use thiserror::Error;

use crate::exec::ExecError;

/// Failure of a single step inside an installer sequence.
///
/// A step fails either because the subordinate process could not be run
/// (spawn failure, timeout) or because it wrote stderr text that the
/// warning classifier did not recognise as benign.
#[derive(Error, Debug)]
pub enum StepError {
    /// The subordinate process could not be executed to completion.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// The command completed but reported real errors on stderr.
    #[error("command reported errors:\n{0}")]
    Stderr(String),
}

/// An installer sequence aborted at a failing step.
///
/// Carries the name of the program that could not be installed; the
/// underlying [`StepError`] is preserved as the error source so the full
/// chain is visible when printed with `{:#}`.
#[derive(Error, Debug)]
#[error("failed to install {program}")]
pub struct InstallError {
    /// Name of the program that could not be installed.
    pub program: String,
    /// The step failure that aborted the sequence.
    #[source]
    pub source: StepError,
}

impl InstallError {
    /// Wrap a step failure with the name of the failing program.
    pub fn new(program: impl Into<String>, source: StepError) -> Self {
        Self {
            program: program.into(),
            source,
        }
    }
}
