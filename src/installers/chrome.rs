//! Install Google Chrome from the upstream .deb.

use anyhow::Result;

use super::{Context, InstallResult, Installer};
use crate::error::InstallError;

const DEB_FILE: &str = "google-chrome-stable_current_amd64.deb";

/// Download the stable .deb into the scratch directory and install it
/// with apt so dependencies are resolved.
#[derive(Debug)]
pub struct InstallChrome;

impl Installer for InstallChrome {
    fn name(&self) -> &str {
        "Google Chrome"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        ctx.runner.which("apt") && ctx.runner.which("curl")
    }

    fn run(&self, ctx: &Context<'_>) -> Result<InstallResult> {
        if ctx.dry_run {
            ctx.log
                .dry_run(&format!("download {DEB_FILE} and install it with apt"));
            return Ok(InstallResult::DryRun);
        }
        let fail = |e| InstallError::new("google-chrome", e);
        let dir = ctx.downloads_dir.display();

        ctx.log.info("downloading Chrome .deb");
        ctx.strict_step(&format!(
            "cd {dir} && curl -sO https://dl.google.com/linux/direct/{DEB_FILE}"
        ))
        .map_err(fail)?;

        ctx.log.info("installing Chrome from .deb");
        ctx.apt_step(&format!("cd {dir} && apt install -y ./{DEB_FILE}"))
            .map_err(fail)?;

        ctx.log.info("Google Chrome installed");
        Ok(InstallResult::Ok)
    }
}
