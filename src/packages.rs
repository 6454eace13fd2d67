//! Fixed package sets for a fresh workstation.

/// Apt packages installed by the `install` command.
///
/// Development essentials plus the tools other installers rely on
/// (curl, gnupg, lsb-release for repository setup).
pub const APT_PACKAGES: &[&str] = &[
    "build-essential",
    "python3-dev",
    "pkg-config",
    "apt-transport-https",
    "cmake",
    "curl",
    "ca-certificates",
    "gnupg",
    "lsb-release",
    "htop",
    "mmv",
    "neovim",
    "tmux",
];

/// A snap package, with confinement modeled as a typed field rather than
/// a flag embedded in the package name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapPackage {
    /// Snap store name.
    pub name: &'static str,
    /// Whether the snap requires classic confinement (`--classic`).
    pub classic: bool,
}

impl SnapPackage {
    const fn strict(name: &'static str) -> Self {
        Self {
            name,
            classic: false,
        }
    }

    const fn classic(name: &'static str) -> Self {
        Self {
            name,
            classic: true,
        }
    }

    /// The full argument string for `snap install`.
    #[must_use]
    pub fn install_args(&self) -> String {
        if self.classic {
            format!("{} --classic", self.name)
        } else {
            self.name.to_string()
        }
    }
}

/// Snap packages installed by the `install` command.
pub const SNAP_PACKAGES: &[SnapPackage] = &[
    SnapPackage::strict("bitwarden"),
    SnapPackage::strict("jdownloader2"),
    SnapPackage::strict("libreoffice"),
    SnapPackage::strict("signal-desktop"),
    SnapPackage::strict("spotify"),
    SnapPackage::strict("vlc"),
    SnapPackage::classic("sublime-text"),
    SnapPackage::classic("code"),
];
