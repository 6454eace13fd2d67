//! Command-line interface definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the provisioning engine.
#[derive(Parser, Debug)]
#[command(
    name = "provision",
    about = "Debian/Ubuntu workstation provisioning engine",
    version
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Preview commands without executing them
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Per-command timeout in seconds
    #[arg(long, global = true, default_value_t = 600)]
    pub timeout: u64,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Provision the workstation (packages, browsers, Docker, shell)
    Install(InstallOpts),
    /// Remove the scratch directory and clean apt caches
    Clean(CleanOpts),
    /// Print version information
    Version,
}

/// Options for the `install` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct InstallOpts {
    /// Skip specific installers (name substring match)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Run only specific installers (name substring match)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}

/// Options for the `clean` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CleanOpts {}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_install() {
        let cli = Cli::parse_from(["provision", "install"]);
        assert!(matches!(cli.command, Command::Install(_)));
    }

    #[test]
    fn parse_install_dry_run() {
        let cli = Cli::parse_from(["provision", "--dry-run", "install"]);
        assert!(cli.global.dry_run);
    }

    #[test]
    fn parse_install_dry_run_short() {
        let cli = Cli::parse_from(["provision", "-d", "install"]);
        assert!(cli.global.dry_run);
    }

    #[test]
    fn parse_install_skip() {
        let cli = Cli::parse_from(["provision", "install", "--skip", "snap,docker"]);
        assert!(matches!(&cli.command, Command::Install(_)));
        if let Command::Install(opts) = cli.command {
            assert_eq!(opts.skip, vec!["snap", "docker"]);
        }
    }

    #[test]
    fn parse_install_only() {
        let cli = Cli::parse_from(["provision", "install", "--only", "fish"]);
        assert!(matches!(&cli.command, Command::Install(_)));
        if let Command::Install(opts) = cli.command {
            assert_eq!(opts.only, vec!["fish"]);
        }
    }

    #[test]
    fn parse_timeout_default() {
        let cli = Cli::parse_from(["provision", "install"]);
        assert_eq!(cli.global.timeout, 600);
    }

    #[test]
    fn parse_timeout_override() {
        let cli = Cli::parse_from(["provision", "--timeout", "30", "install"]);
        assert_eq!(cli.global.timeout, 30);
    }

    #[test]
    fn parse_clean() {
        let cli = Cli::parse_from(["provision", "clean"]);
        assert!(matches!(cli.command, Command::Clean(_)));
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["provision", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::parse_from(["provision", "-v", "install"]);
        assert!(cli.verbose);
    }
}
