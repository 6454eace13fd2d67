//! Debian/Ubuntu workstation provisioning engine.
//!
//! Sets up a fresh machine by shelling out to the system package manager
//! and assorted installer scripts: apt packages, snap packages, Brave
//! Browser, Docker, Fish shell, Google Chrome, Poetry, and qBittorrent.
//!
//! The public API is organised into four layers:
//!
//! - **[`exec`]** — shell command execution with captured output and a timeout
//! - **[`apt`]** — classification of apt stderr into benign warnings and real errors
//! - **[`installers`]** — sequential call-and-check install routines over the two primitives
//! - **[`commands`]** — top-level subcommand orchestration (`install`, `clean`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod apt;
pub mod cli;
pub mod commands;
pub mod error;
pub mod exec;
pub mod installers;
pub mod logging;
pub mod packages;
