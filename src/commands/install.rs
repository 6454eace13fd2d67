//! The `install` command: run the full installer sequence.

use std::time::Duration;

use anyhow::{Context as _, Result};

use crate::cli::{GlobalOpts, InstallOpts};
use crate::exec::ShellRunner;
use crate::installers::{self, Context, Installer};
use crate::logging::Logger;

/// Run the install command.
///
/// # Errors
///
/// Returns an error if the root check or scratch-directory setup fails,
/// or if any selected installer failed (after all of them have run).
pub fn run(global: &GlobalOpts, opts: &InstallOpts, log: &Logger) -> Result<()> {
    let version = option_env!("PROVISION_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.info(&format!("provision {version}"));

    let runner = ShellRunner;
    let ctx = Context::new(
        &runner,
        log,
        global.dry_run,
        Duration::from_secs(global.timeout),
    );

    super::ensure_root(&ctx)?;

    log.stage("Preparing downloads directory");
    prepare_downloads_dir(&ctx)?;

    let all = installers::all_installers();
    for installer in filter_installers(&all, &opts.skip, &opts.only) {
        installers::execute(installer, &ctx);
    }

    log.print_summary();

    if log.has_failures() {
        anyhow::bail!("one or more installers failed");
    }
    Ok(())
}

/// Create the scratch directory used by download-based installers.
fn prepare_downloads_dir(ctx: &Context<'_>) -> Result<()> {
    if ctx.dry_run {
        ctx.log
            .dry_run(&format!("create {}", ctx.downloads_dir.display()));
        return Ok(());
    }
    std::fs::create_dir_all(&ctx.downloads_dir)
        .with_context(|| format!("creating {}", ctx.downloads_dir.display()))?;
    ctx.log
        .debug(&format!("downloads dir: {}", ctx.downloads_dir.display()));
    Ok(())
}

/// Apply the `--skip`/`--only` name filters, `--only` winning when both
/// are given. Matching is a case-insensitive substring test.
#[must_use]
pub fn filter_installers<'i>(
    all: &'i [Box<dyn Installer>],
    skip: &[String],
    only: &[String],
) -> Vec<&'i dyn Installer> {
    all.iter()
        .filter(|installer| {
            let name = installer.name().to_lowercase();
            if !only.is_empty() {
                return only.iter().any(|o| name.contains(&o.to_lowercase()));
            }
            if !skip.is_empty() {
                return !skip.iter().any(|s| name.contains(&s.to_lowercase()));
            }
            true
        })
        .map(AsRef::as_ref)
        .collect()
}
