//! Optional git repository initialization for the scaffolded project

use crate::scaffold::StepOutcome;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Initialize a fresh repository with an initial commit
///
/// Failures never abort scaffolding; they degrade to a warning carrying a
/// manual-recovery instruction.
#[must_use]
pub fn initialize_repository(target_path: &Path) -> StepOutcome {
    let probe = Command::new("git").args(["--version"]).output();
    if !matches!(probe, Ok(output) if output.status.success()) {
        return StepOutcome::degraded(
            "Git is not installed. Run 'git init' manually once it is available.",
        );
    }

    let steps: &[&[&str]] = &[
        &["init"],
        &["add", "."],
        &["commit", "-m", "chore: initial commit from oidc-starter"],
    ];

    for args in steps {
        if let Err(message) = run_git(args, target_path) {
            return StepOutcome::degraded(format!(
                "Failed to initialize git repository ({message}). Run 'git init' manually in the project directory."
            ));
        }
    }

    info!("Git repository initialized");
    StepOutcome::Completed
}

/// Attach a remote named `origin` to the initialized repository
#[must_use]
pub fn add_remote(target_path: &Path, remote_url: &str) -> StepOutcome {
    match run_git(&["remote", "add", "origin", remote_url], target_path) {
        Ok(()) => {
            info!("Remote 'origin' added");
            StepOutcome::Completed
        }
        Err(message) => StepOutcome::degraded(format!(
            "Failed to add remote ({message}). Run 'git remote add origin {remote_url}' manually."
        )),
    }
}

/// Run one git subcommand in the project directory
fn run_git(args: &[&str], target_path: &Path) -> Result<(), String> {
    debug!("git {}", args.join(" "));

    let output = Command::new("git")
        .args(args)
        .current_dir(target_path)
        .output()
        .map_err(|err| err.to_string())?;

    if output.status.success() {
        Ok(())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).trim().to_owned())
    }
}
