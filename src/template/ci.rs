//! CI configuration pruning for the unused VCS host

use crate::config::VcsHost;
use crate::system::System;
use crate::template::tokens::GITLAB_CI_FILE;
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::debug;

/// GitHub metadata directory removed when scaffolding for GitLab
const GITHUB_DIR: &str = ".github";

/// Delete the CI configuration belonging to the host that was not chosen
///
/// GitHub projects lose `.gitlab-ci.yml`; GitLab projects lose the whole
/// `.github/` directory. Absence of either is not an error.
///
/// # Errors
///
/// Returns an error if an existing CI file or directory cannot be removed.
#[inline]
pub fn prune(system: &dyn System, target_path: &Path, vcs_host: VcsHost) -> Result<()> {
    match vcs_host {
        VcsHost::Github => {
            let gitlab_ci = target_path.join(GITLAB_CI_FILE);
            if system.is_file(&gitlab_ci) {
                system
                    .remove_file(&gitlab_ci)
                    .with_context(|| format!("Failed to remove {}", gitlab_ci.display()))?;
            } else {
                debug!("No GitLab CI file to prune");
            }
        }
        VcsHost::Gitlab => {
            let github_dir = target_path.join(GITHUB_DIR);
            if system.is_dir(&github_dir) {
                system
                    .remove_dir_all(&github_dir)
                    .with_context(|| format!("Failed to remove {}", github_dir.display()))?;
            } else {
                debug!("No GitHub workflows directory to prune");
            }
        }
    }

    Ok(())
}
