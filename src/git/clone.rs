//! Template repository fetching

use crate::config::validation::is_valid_git_url;
use crate::error::ScaffoldError;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Clone the template repository into the target path and strip its history
///
/// The URL must pass the allow-list validation and the forbidden-flag check
/// before the external clone runs. URL and target are handed to `git` as
/// discrete arguments behind a `--` separator, never through a shell string.
///
/// # Errors
///
/// Returns an error if the URL is rejected, the clone invocation cannot be
/// launched, or `git` exits non-zero. A partially cloned target directory is
/// left in place for inspection.
#[inline]
pub fn fetch_template(system: &dyn System, template_url: &str, target_path: &Path) -> Result<()> {
    if !is_valid_git_url(template_url) {
        return Err(ScaffoldError::validation(format!(
            "Invalid template URL format: '{template_url}'"
        ))
        .into());
    }

    if has_forbidden_flags(template_url) {
        return Err(ScaffoldError::validation(
            "Invalid template URL: contains forbidden git options".to_owned(),
        )
        .into());
    }

    let target = target_path.to_str().ok_or_else(|| {
        ScaffoldError::fetch("Failed to convert target path to string".to_owned())
    })?;

    debug!("Cloning {template_url} into {target}");

    let output = Command::new("git")
        .args(["clone", "--", template_url, target])
        .output()
        .context("Failed to execute git clone command")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ScaffoldError::fetch(format!(
            "Failed to clone template '{}': {}",
            template_url,
            stderr.trim()
        ))
        .into());
    }

    strip_git_metadata(system, target_path)
}

/// Check that the `git` binary is available on this system
///
/// # Errors
///
/// Returns an error if `git --version` cannot be executed successfully.
pub fn check_git_availability() -> Result<()> {
    let output = Command::new("git")
        .args(["--version"])
        .output()
        .context("Failed to execute git. Is git installed and on PATH?")?;

    if !output.status.success() {
        return Err(ScaffoldError::command("git --version returned an error".to_owned()).into());
    }

    Ok(())
}

/// Remove the cloned `.git` directory so the project starts without history
fn strip_git_metadata(system: &dyn System, target_path: &Path) -> Result<()> {
    let git_dir = target_path.join(".git");
    if system.is_dir(&git_dir) {
        system
            .remove_dir_all(&git_dir)
            .with_context(|| format!("Failed to remove {}", git_dir.display()))?;
    }

    Ok(())
}

/// Reject URLs smuggling git options past the argument parser
fn has_forbidden_flags(url: &str) -> bool {
    url.contains("--upload-pack") || url.split_whitespace().any(|part| part == "-u")
}
