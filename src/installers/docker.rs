//! Install Docker Engine and the containerd runtime.
//!
//! Steps from <https://docs.docker.com/engine/install/ubuntu/> and the
//! Linux post-install guide (docker group membership).

use anyhow::Result;

use super::{Context, InstallResult, Installer};
use crate::error::InstallError;

const KEYRING: &str = "/usr/share/keyrings/docker-archive-keyring.gpg";
const KEY_URL: &str = "https://download.docker.com/linux/ubuntu/gpg";
const SOURCES_LIST: &str = "/etc/apt/sources.list.d/docker.list";

/// The engine packages, installed one at a time like the apt set.
const DOCKER_PACKAGES: &[&str] = &["docker-ce", "docker-ce-cli", "containerd.io"];

/// Register the Docker repository, install the engine, add the invoking
/// user to the docker group.
#[derive(Debug)]
pub struct InstallDocker;

/// The account to add to the docker group: the sudo caller when present,
/// otherwise `$USER`. Root itself needs no group membership.
fn target_user() -> Option<String> {
    std::env::var("SUDO_USER")
        .or_else(|_| std::env::var("USER"))
        .ok()
        .filter(|user| !user.is_empty() && user != "root")
}

impl Installer for InstallDocker {
    fn name(&self) -> &str {
        "Docker"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        ctx.runner.which("apt") && ctx.runner.which("curl") && ctx.runner.which("gpg")
    }

    fn run(&self, ctx: &Context<'_>) -> Result<InstallResult> {
        if ctx.dry_run {
            ctx.log
                .dry_run("add Docker apt repository, install engine, set up docker group");
            return Ok(InstallResult::DryRun);
        }
        let fail = |e| InstallError::new("docker", e);

        ctx.log.info("fetching Docker signing key");
        ctx.strict_step(&format!("curl -fsSL {KEY_URL} | gpg --dearmor -o {KEYRING}"))
            .map_err(fail)?;

        ctx.log.info("adding Docker apt repository");
        ctx.strict_step(&format!(
            "echo \"deb [arch=$(dpkg --print-architecture) signed-by={KEYRING}] \
             https://download.docker.com/linux/ubuntu $(lsb_release -cs) stable\" \
             | tee {SOURCES_LIST} > /dev/null"
        ))
        .map_err(fail)?;

        ctx.log.info("updating apt repositories");
        ctx.apt_step("apt update -y").map_err(fail)?;

        for pkg in DOCKER_PACKAGES {
            ctx.log.info(&format!("installing {pkg}"));
            ctx.apt_step(&format!("apt install -y {pkg}"))
                .map_err(|e| InstallError::new(*pkg, e))?;
        }

        if let Some(user) = target_user() {
            ctx.log.info(&format!("adding {user} to the docker group"));
            ctx.strict_step(&format!("usermod -aG docker {user}"))
                .map_err(fail)?;
        } else {
            ctx.log.warn("no non-root user to add to the docker group");
        }

        ctx.log.info("Docker installed");
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
    fn engine_packages_install_after_repo_setup() {
        let runner = MockRunner::ok();
        let log = Logger::new();
        let ctx = make_context(&runner, &log);

        assert_eq!(InstallDocker.run(&ctx).unwrap(), InstallResult::Ok);

        let commands = runner.recorded_commands();
        assert!(commands[0].contains("gpg --dearmor"));
        assert!(commands[1].contains("tee /etc/apt/sources.list.d/docker.list"));
        assert_eq!(commands[2], "apt update -y");
        assert!(commands[3].contains("docker-ce"));
        assert!(commands[4].contains("docker-ce-cli"));
        assert!(commands[5].contains("containerd.io"));
    }

    #[test]
    fn repo_update_failure_stops_before_packages() {
        let runner = MockRunner::with_script(vec![
            MockResponse::Output {
                stdout: "",
                stderr: "",
            },
            MockResponse::Output {
                stdout: "",
                stderr: "",
            },
            MockResponse::Output {
                stdout: "",
                stderr: "E: The repository does not have a Release file",
            },
        ]);
        let log = Logger::new();
        let ctx = make_context(&runner, &log);

        assert!(InstallDocker.run(&ctx).is_err());
        assert_eq!(runner.recorded_commands().len(), 3);
    }

    #[test]
    fn hung_key_fetch_surfaces_as_timeout() {
        let runner = MockRunner::with_script(vec![MockResponse::Timeout]);
        let log = Logger::new();
        let ctx = make_context(&runner, &log);

        let err = InstallDocker.run(&ctx).unwrap_err();
        assert!(format!("{err:#}").contains("did not finish"));
    }

    #[test]
    fn target_user_skips_root() {
        // Can't mutate the environment safely in parallel tests; exercise
        // the filter directly instead.
        assert_ne!(target_user().as_deref(), Some("root"));
    }
}
