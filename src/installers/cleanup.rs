//! Remove the scratch directory and clean apt caches.

use anyhow::{Context as _, Result};

use super::{Context, InstallResult, Installer};
use crate::error::InstallError;

/// Delete the downloads scratch directory, then `apt autoclean && apt clean`.
///
/// Runs last in the install sequence and backs the standalone `clean`
/// subcommand.
#[derive(Debug)]
pub struct CleanCaches;

impl Installer for CleanCaches {
    fn name(&self) -> &str {
        "Clean caches"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        ctx.runner.which("apt")
    }

    fn run(&self, ctx: &Context<'_>) -> Result<InstallResult> {
        if ctx.dry_run {
            ctx.log
                .dry_run("remove the downloads directory and clean apt caches");
            return Ok(InstallResult::DryRun);
        }

        if ctx.downloads_dir.exists() {
            ctx.log
                .debug(&format!("removing {}", ctx.downloads_dir.display()));
            std::fs::remove_dir_all(&ctx.downloads_dir).with_context(|| {
                format!(
                    "removing downloads directory {}",
                    ctx.downloads_dir.display()
                )
            })?;
        }

        ctx.log.info("cleaning apt caches");
        ctx.apt_step("apt autoclean && apt clean")
            .map_err(|e| InstallError::new("cleanup", e))?;

        Ok(InstallResult::Ok)
    }
}
