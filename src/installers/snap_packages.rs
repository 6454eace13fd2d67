//! Install the fixed snap package set.

use anyhow::Result;

use super::{Context, InstallResult, Installer};
use crate::error::InstallError;
use crate::packages::SNAP_PACKAGES;

/// Install snap packages, classic-confinement snaps first.
///
/// Snap output is not run through the apt classifier; any stderr from
/// `snap install` is treated as a real failure.
#[derive(Debug)]
pub struct InstallSnapPackages;

impl Installer for InstallSnapPackages {
    fn name(&self) -> &str {
        "Snap packages"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        ctx.runner.which("snap")
    }

    fn run(&self, ctx: &Context<'_>) -> Result<InstallResult> {
        if ctx.dry_run {
            ctx.log
                .dry_run(&format!("snap install <{} packages>", SNAP_PACKAGES.len()));
            return Ok(InstallResult::DryRun);
        }

        let classic_first = SNAP_PACKAGES
            .iter()
            .filter(|p| p.classic)
            .chain(SNAP_PACKAGES.iter().filter(|p| !p.classic));

        for pkg in classic_first {
            ctx.log.info(&format!("installing {}", pkg.name));
            ctx.strict_step(&format!("snap install {}", pkg.install_args()))
                .map_err(|e| InstallError::new(pkg.name, e))?;
        }

        ctx.log.info("snap packages installed");
        Ok(InstallResult::Ok)
    }
}
