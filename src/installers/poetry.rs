//! Install Poetry via the upstream installer script.
//!
//! Steps from <https://python-poetry.org/docs/>.

use anyhow::Result;

use super::{Context, InstallResult, Installer};
use crate::error::InstallError;

const INSTALL_SCRIPT_URL: &str =
    "https://raw.githubusercontent.com/python-poetry/poetry/master/get-poetry.py";

/// Pipe the upstream install script into python3.
#[derive(Debug)]
pub struct InstallPoetry;

impl Installer for InstallPoetry {
    fn name(&self) -> &str {
        "Poetry"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        ctx.runner.which("curl") && ctx.runner.which("python3")
    }

    fn run(&self, ctx: &Context<'_>) -> Result<InstallResult> {
        if ctx.dry_run {
            ctx.log.dry_run("run the Poetry install script with python3");
            return Ok(InstallResult::DryRun);
        }

        ctx.log.info("running the Poetry install script");
        ctx.strict_step(&format!("curl -sSL {INSTALL_SCRIPT_URL} | python3 -"))
            .map_err(|e| InstallError::new("poetry", e))?;

        ctx.log.info("Poetry installed");
        Ok(InstallResult::Ok)
    }
}
