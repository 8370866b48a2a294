//! Dependency installation through the chosen package manager

use crate::config::PackageManager;
use crate::scaffold::StepOutcome;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Install project dependencies
///
/// Probes the package manager binary first; a missing binary or a failed
/// install degrades to a warning telling the user how to finish by hand.
#[must_use]
pub fn install_dependencies(target_path: &Path, package_manager: PackageManager) -> StepOutcome {
    let command = package_manager.command();

    let probe = Command::new(command).args(["--version"]).output();
    if !matches!(probe, Ok(output) if output.status.success()) {
        return StepOutcome::degraded(format!(
            "{command} is not installed on your system. Install {command} and run '{command} install' in the project directory."
        ));
    }

    debug!("Running {command} install");

    match Command::new(command)
        .args(["install"])
        .current_dir(target_path)
        .output()
    {
        Ok(output) if output.status.success() => StepOutcome::Completed,
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            StepOutcome::degraded(format!(
                "Failed to install dependencies: {}. Run '{command} install' manually in the project directory.",
                stderr.trim()
            ))
        }
        Err(err) => StepOutcome::degraded(format!(
            "Failed to launch {command}: {err}. Run '{command} install' manually in the project directory."
        )),
    }
}
