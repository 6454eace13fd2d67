//! Sequential installer routines over the command runner and classifier.
//!
//! Each installer is a fixed, linear script: run a sequence of shell
//! commands, check the captured stderr after each step, and abort the
//! sequence on the first real failure. There is no branching, no state
//! machine, and no recovery; the driver decides whether to continue with
//! the next installer.

pub mod apt_packages;
pub mod brave;
pub mod chrome;
pub mod cleanup;
pub mod docker;
pub mod fish;
pub mod poetry;
pub mod qbittorrent;
pub mod snap_packages;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::apt;
use crate::error::StepError;
use crate::exec::{ExecResult, Runner};
use crate::logging::{Log, TaskStatus};

/// Outcome of an installer that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallResult {
    /// All steps completed.
    Ok,
    /// The installer chose not to run, with a reason.
    Skipped(String),
    /// Dry-run mode; the steps were logged but not executed.
    DryRun,
}

/// Shared state for a provisioning run.
pub struct Context<'a> {
    /// Command runner for all installer steps.
    pub runner: &'a dyn Runner,
    /// Logging backend.
    pub log: &'a dyn Log,
    /// When set, installers log their steps instead of executing them.
    pub dry_run: bool,
    /// Deadline applied to every installer step.
    pub timeout: Duration,
    /// Scratch directory for downloaded artifacts. Created before the
    /// installers run and removed by [`cleanup::CleanCaches`].
    pub downloads_dir: PathBuf,
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("dry_run", &self.dry_run)
            .field("timeout", &self.timeout)
            .field("downloads_dir", &self.downloads_dir)
            .finish_non_exhaustive()
    }
}

impl<'a> Context<'a> {
    /// Create a context with the default scratch directory under the
    /// system temp dir.
    #[must_use]
    pub fn new(runner: &'a dyn Runner, log: &'a dyn Log, dry_run: bool, timeout: Duration) -> Self {
        Self {
            runner,
            log,
            dry_run,
            timeout,
            downloads_dir: std::env::temp_dir().join("provision-downloads"),
        }
    }

    /// Run a step where any stderr output is a real failure.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Exec`] if the command could not be run and
    /// [`StepError::Stderr`] if it wrote anything to stderr.
    pub fn strict_step(&self, command: &str) -> Result<ExecResult, StepError> {
        let result = self.runner.run_with_timeout(command, self.timeout)?;
        if result.stderr.trim().is_empty() {
            return Ok(result);
        }
        Err(StepError::Stderr(result.stderr))
    }

    /// Run an apt step; stderr is filtered through the benign-warning list.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Exec`] if the command could not be run and
    /// [`StepError::Stderr`] if stderr contains text the classifier does
    /// not recognise as benign.
    pub fn apt_step(&self, command: &str) -> Result<ExecResult, StepError> {
        let result = self.runner.run_with_timeout(command, self.timeout)?;
        if let Some(errors) = apt::filter_benign(&result.stderr) {
            return Err(StepError::Stderr(errors.to_string()));
        }
        Ok(result)
    }
}

/// A named installer sequence.
pub trait Installer: Send + Sync {
    /// Human-readable installer name, used for summary lines and the
    /// `--skip`/`--only` filters.
    fn name(&self) -> &str;

    /// Whether this installer applies to the current system (required
    /// tools present).
    fn should_run(&self, ctx: &Context<'_>) -> bool;

    /// Execute the sequence.
    ///
    /// # Errors
    ///
    /// Returns an error when a step fails for real; the driver records the
    /// failure and continues with the next installer.
    fn run(&self, ctx: &Context<'_>) -> Result<InstallResult>;
}

/// The complete installer list for the `install` command, in run order.
///
/// Cache cleanup runs last so earlier installers can use the scratch
/// directory.
#[must_use]
pub fn all_installers() -> Vec<Box<dyn Installer>> {
    vec![
        Box::new(apt_packages::InstallAptPackages),
        Box::new(snap_packages::InstallSnapPackages),
        Box::new(brave::InstallBrave),
        Box::new(docker::InstallDocker),
        Box::new(fish::InstallFish),
        Box::new(chrome::InstallChrome),
        Box::new(poetry::InstallPoetry),
        Box::new(qbittorrent::InstallQbittorrent),
        Box::new(cleanup::CleanCaches),
    ]
}

/// Execute an installer, recording the result in the logger.
///
/// A failure aborts only this installer's sequence; the caller decides
/// whether to continue with the next one.
pub fn execute(installer: &dyn Installer, ctx: &Context<'_>) {
    if !installer.should_run(ctx) {
        ctx.log.debug(&format!(
            "skipping installer: {} (not applicable)",
            installer.name()
        ));
        ctx.log
            .record_task(installer.name(), TaskStatus::NotApplicable, None);
        return;
    }

    ctx.log.stage(installer.name());

    match installer.run(ctx) {
        Ok(InstallResult::Ok) => {
            ctx.log.record_task(installer.name(), TaskStatus::Ok, None);
        }
        Ok(InstallResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
            ctx.log
                .record_task(installer.name(), TaskStatus::Skipped, Some(&reason));
        }
        Ok(InstallResult::DryRun) => {
            ctx.log
                .record_task(installer.name(), TaskStatus::DryRun, None);
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", installer.name()));
            ctx.log
                .record_task(installer.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
        }
    }
}
