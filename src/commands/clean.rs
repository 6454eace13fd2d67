//! The `clean` command: scratch-directory removal and apt cache cleanup.

use std::time::Duration;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::exec::ShellRunner;
use crate::installers::{self, Context, cleanup::CleanCaches};
use crate::logging::Logger;

/// Run the clean command.
///
/// # Errors
///
/// Returns an error if the root check fails or the cleanup itself failed.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let runner = ShellRunner;
    let ctx = Context::new(
        &runner,
        log,
        global.dry_run,
        Duration::from_secs(global.timeout),
    );

    super::ensure_root(&ctx)?;
    installers::execute(&CleanCaches, &ctx);
    log.print_summary();

    if log.has_failures() {
        anyhow::bail!("cleanup failed");
    }
    Ok(())
}
