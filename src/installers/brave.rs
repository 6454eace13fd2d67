//! Install Brave Browser from its apt repository.
//!
//! Steps from <https://brave.com/linux/#linux>.

use anyhow::Result;

use super::{Context, InstallResult, Installer};
use crate::error::InstallError;

const KEYRING: &str = "/usr/share/keyrings/brave-browser-archive-keyring.gpg";
const KEY_URL: &str =
    "https://brave-browser-apt-release.s3.brave.com/brave-browser-archive-keyring.gpg";
const REPO: &str = "https://brave-browser-apt-release.s3.brave.com/";
const SOURCES_LIST: &str = "/etc/apt/sources.list.d/brave-browser-release.list";

/// Fetch the signing key, register the repository, install `brave-browser`.
#[derive(Debug)]
pub struct InstallBrave;

impl Installer for InstallBrave {
    fn name(&self) -> &str {
        "Brave Browser"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        ctx.runner.which("apt") && ctx.runner.which("curl")
    }

    fn run(&self, ctx: &Context<'_>) -> Result<InstallResult> {
        if ctx.dry_run {
            ctx.log
                .dry_run("add Brave apt repository and install brave-browser");
            return Ok(InstallResult::DryRun);
        }
        let fail = |e| InstallError::new("brave-browser", e);

        ctx.log.info("fetching Brave signing key");
        ctx.strict_step(&format!("curl -fsSLo {KEYRING} {KEY_URL}"))
            .map_err(fail)?;

        ctx.log.info("adding Brave apt repository");
        ctx.strict_step(&format!(
            "echo \"deb [signed-by={KEYRING} arch=amd64] {REPO} stable main\" | tee {SOURCES_LIST}"
        ))
        .map_err(fail)?;

        ctx.log.info("installing brave-browser");
        ctx.apt_step("apt update -y && apt install -y brave-browser")
            .map_err(fail)?;

        ctx.log.info("Brave Browser installed");
        Ok(InstallResult::Ok)
    }
}
