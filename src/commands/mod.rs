//! Top-level subcommand orchestration.

pub mod clean;
pub mod install;

use anyhow::{Context as _, Result};

use crate::installers::Context;

/// Installers touch system package state, so they require root (the
/// original tool is root-only by design). Dry runs are exempt.
fn ensure_root(ctx: &Context<'_>) -> Result<()> {
    if ctx.dry_run {
        return Ok(());
    }
    let result = ctx
        .runner
        .run("id -u")
        .context("checking effective user id")?;
    if result.stdout.trim() == "0" {
        return Ok(());
    }
    anyhow::bail!("provisioning requires root; re-run with sudo or pass --dry-run")
}
