//! Install Fish shell from its release PPA.
//!
//! Steps from <https://launchpad.net/~fish-shell/+archive/ubuntu/release-3>.

use anyhow::Result;

use super::{Context, InstallResult, Installer};
use crate::error::InstallError;

/// Add the fish-shell PPA and install the `fish` package.
#[derive(Debug)]
pub struct InstallFish;

impl Installer for InstallFish {
    fn name(&self) -> &str {
        "Fish shell"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        ctx.runner.which("apt-add-repository")
    }

    fn run(&self, ctx: &Context<'_>) -> Result<InstallResult> {
        if ctx.dry_run {
            ctx.log.dry_run("add fish-shell PPA and install fish");
            return Ok(InstallResult::DryRun);
        }
        let fail = |e| InstallError::new("fish", e);

        ctx.log.info("adding fish-shell PPA");
        ctx.strict_step("apt-add-repository ppa:fish-shell/release-3 -y")
            .map_err(fail)?;

        ctx.log.info("installing fish");
        ctx.apt_step("apt update -y && apt install -y fish")
            .map_err(fail)?;

        ctx.log.info("Fish shell installed");
        Ok(InstallResult::Ok)
    }
}
