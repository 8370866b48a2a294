//! The immutable configuration record assembled from validated user input

use serde::{Deserialize, Serialize};
use std::fmt;

/// Package name of this generator, substituted for `__CLI_PACKAGE__` in
/// template documentation
pub const CLI_PACKAGE: &str = "oidc-starter";

/// Supported version-control hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsHost {
    Github,
    Gitlab,
}

impl VcsHost {
    /// Host identifier as shown in prompts and logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
        }
    }
}

impl fmt::Display for VcsHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// Binary name used when spawning the package manager
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
        }
    }

    /// Invocation prefix for running package scripts
    #[must_use]
    pub const fn run_prefix(self) -> &'static str {
        match self {
            Self::Npm => "npm run",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Configuration record driving a single scaffolding run
///
/// Built once from validated prompt answers and read-only afterwards.
/// `package_name` is always the normalized form of `display_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub display_name: String,
    pub package_name: String,
    pub oidc_authority: String,
    pub oidc_client_id: String,
    pub redirect_url: String,
    pub resource_server_url: String,
    pub vcs_host: VcsHost,
    pub package_manager: PackageManager,
    pub node_version: String,
    pub use_proxy: bool,
}
