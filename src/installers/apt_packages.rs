//! Install the fixed apt package set.

use anyhow::Result;

use super::{Context, InstallResult, Installer};
use crate::error::InstallError;
use crate::packages::APT_PACKAGES;

/// Install apt packages one at a time, tolerating benign apt warnings.
#[derive(Debug)]
pub struct InstallAptPackages;

impl Installer for InstallAptPackages {
    fn name(&self) -> &str {
        "Apt packages"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        ctx.runner.which("apt")
    }

    fn run(&self, ctx: &Context<'_>) -> Result<InstallResult> {
        if ctx.dry_run {
            ctx.log
                .dry_run(&format!("apt install -y <{} packages>", APT_PACKAGES.len()));
            return Ok(InstallResult::DryRun);
        }

        for pkg in APT_PACKAGES {
            ctx.log.info(&format!("installing {pkg}"));
            ctx.apt_step(&format!("apt install -y {pkg}"))
                .map_err(|e| InstallError::new(*pkg, e))?;
        }

        ctx.log.info("apt packages installed");
        Ok(InstallResult::Ok)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::installers::test_helpers::{MockResponse, MockRunner, make_context};
    use crate::logging::Logger;

    #[test]
    fn installs_every_package() {
        let runner = MockRunner::ok();
        let log = Logger::new();
        let ctx = make_context(&runner, &log);

        let result = InstallAptPackages.run(&ctx).unwrap();
        assert_eq!(result, InstallResult::Ok);

        let commands = runner.recorded_commands();
        assert_eq!(commands.len(), APT_PACKAGES.len());
        assert_eq!(commands[0], format!("apt install -y {}", APT_PACKAGES[0]));
    }

    #[test]
    fn aborts_on_first_real_failure() {
        // First package reports a real error; nothing further may run.
        let runner = MockRunner::with_script(vec![MockResponse::Output {
            stdout: "",
            stderr: "E: Unable to locate package build-essential",
        }]);
        let log = Logger::new();
        let ctx = make_context(&runner, &log);

        let err = InstallAptPackages.run(&ctx).unwrap_err();
        assert!(err.to_string().contains("build-essential"));
        assert_eq!(runner.recorded_commands().len(), 1);
    }

    #[test]
    fn benign_warnings_do_not_abort() {
        let runner = MockRunner::with_script(vec![MockResponse::Output {
            stdout: "",
            stderr: "build-essential is already the newest version (12.9).\n",
        }]);
        let log = Logger::new();
        let ctx = make_context(&runner, &log);

        assert_eq!(InstallAptPackages.run(&ctx).unwrap(), InstallResult::Ok);
        assert_eq!(runner.recorded_commands().len(), APT_PACKAGES.len());
    }

    #[test]
    fn dry_run_executes_nothing() {
        let runner = MockRunner::ok();
        let log = Logger::new();
        let mut ctx = make_context(&runner, &log);
        ctx.dry_run = true;

        assert_eq!(InstallAptPackages.run(&ctx).unwrap(), InstallResult::DryRun);
        assert!(runner.recorded_commands().is_empty());
    }

    #[test]
    fn not_applicable_without_apt() {
        let runner = MockRunner::without_tools();
        let log = Logger::new();
        let ctx = make_context(&runner, &log);
        assert!(!InstallAptPackages.should_run(&ctx));
    }
}
