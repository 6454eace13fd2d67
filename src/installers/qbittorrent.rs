//! Install qBittorrent from its stable PPA.
//!
//! Steps from <https://www.qbittorrent.org/download.php>.

use anyhow::Result;

use super::{Context, InstallResult, Installer};
use crate::error::InstallError;

/// Add the qbittorrent-team PPA and install the `qbittorrent` package.
#[derive(Debug)]
pub struct InstallQbittorrent;

impl Installer for InstallQbittorrent {
    fn name(&self) -> &str {
        "qBittorrent"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        ctx.runner.which("add-apt-repository")
    }

    fn run(&self, ctx: &Context<'_>) -> Result<InstallResult> {
        if ctx.dry_run {
            ctx.log.dry_run("add qbittorrent PPA and install qbittorrent");
            return Ok(InstallResult::DryRun);
        }
        let fail = |e| InstallError::new("qbittorrent", e);

        ctx.log.info("adding qbittorrent PPA");
        ctx.strict_step("add-apt-repository ppa:qbittorrent-team/qbittorrent-stable -y")
            .map_err(fail)?;

        ctx.log.info("installing qbittorrent");
        ctx.apt_step("apt update -y && apt install -y qbittorrent")
            .map_err(fail)?;

        ctx.log.info("qBittorrent installed");
        Ok(InstallResult::Ok)
    }
}
