//! Interactive configuration prompts

use crate::config::validation::{validate_http_url, validate_oidc_authority, validate_required};
use crate::config::{PackageManager, ProjectConfig, VcsHost};
use anyhow::Result;
use inquire::validator::Validation;
use inquire::{Confirm, Select, Text};

/// Collect the full configuration record from the user
///
/// Every answer is validated at the prompt, so the returned record never
/// carries an empty or malformed field.
///
/// # Errors
///
/// Returns an error when a prompt is interrupted or cannot render.
pub fn collect_configuration(display_name: String, package_name: String) -> Result<ProjectConfig> {
    let oidc_authority = Text::new("What is your OIDC authority URL?")
        .with_validator(|input: &str| match validate_oidc_authority(input) {
            Ok(()) => Ok(Validation::Valid),
            Err(message) => Ok(Validation::Invalid(message.into())),
        })
        .prompt()?;

    let oidc_client_id = Text::new("What is your OIDC client ID?")
        .with_validator(
            |input: &str| match validate_required(input, "OIDC client ID") {
                Ok(()) => Ok(Validation::Valid),
                Err(message) => Ok(Validation::Invalid(message.into())),
            },
        )
        .prompt()?;

    let redirect_url = Text::new("What is your OIDC redirect URL?")
        .with_default("http://localhost:4200")
        .with_validator(
            |input: &str| match validate_http_url(input, "Redirect URL") {
                Ok(()) => Ok(Validation::Valid),
                Err(message) => Ok(Validation::Invalid(message.into())),
            },
        )
        .prompt()?;

    let resource_server_url = Text::new("What is your resource server URL?")
        .with_default("http://localhost:8080")
        .with_validator(
            |input: &str| match validate_http_url(input, "Resource server URL") {
                Ok(()) => Ok(Validation::Valid),
                Err(message) => Ok(Validation::Invalid(message.into())),
            },
        )
        .prompt()?;

    let vcs_host =
        match Select::new("Which VCS host are you using?", vec!["github", "gitlab"]).prompt()? {
            "gitlab" => VcsHost::Gitlab,
            _ => VcsHost::Github,
        };

    let package_manager = match Select::new(
        "Which package manager would you like to use?",
        vec!["npm", "pnpm", "yarn"],
    )
    .prompt()?
    {
        "pnpm" => PackageManager::Pnpm,
        "yarn" => PackageManager::Yarn,
        _ => PackageManager::Npm,
    };

    let node_version = Text::new("Which Node.js version?")
        .with_default("20")
        .with_validator(|input: &str| match validate_required(input, "Node version") {
            Ok(()) => Ok(Validation::Valid),
            Err(message) => Ok(Validation::Invalid(message.into())),
        })
        .prompt()?;

    let use_proxy = Confirm::new("Route API calls through the dev-server proxy?")
        .with_default(false)
        .prompt()?;

    Ok(ProjectConfig {
        display_name,
        package_name,
        oidc_authority,
        oidc_client_id,
        redirect_url,
        resource_server_url,
        vcs_host,
        package_manager,
        node_version,
        use_proxy,
    })
}

/// Ask before destroying an existing target directory
///
/// # Errors
///
/// Returns an error when the prompt is interrupted or cannot render.
pub fn confirm_overwrite(package_name: &str) -> Result<bool> {
    Ok(
        Confirm::new(&format!(
            "Directory \"{package_name}\" already exists. Overwrite?"
        ))
        .with_default(false)
        .prompt()?,
    )
}

/// Ask whether to initialize a git repository
///
/// # Errors
///
/// Returns an error when the prompt is interrupted or cannot render.
pub fn confirm_git_init() -> Result<bool> {
    Ok(Confirm::new("Initialize git repository?")
        .with_default(true)
        .prompt()?)
}

/// Ask whether to attach a remote
///
/// # Errors
///
/// Returns an error when the prompt is interrupted or cannot render.
pub fn confirm_add_remote() -> Result<bool> {
    Ok(Confirm::new("Add git remote?")
        .with_default(false)
        .prompt()?)
}

/// Ask for the remote repository URL
///
/// # Errors
///
/// Returns an error when the prompt is interrupted or cannot render.
pub fn prompt_remote_url() -> Result<String> {
    Ok(Text::new("Enter remote repository URL:")
        .with_validator(|input: &str| match validate_required(input, "Remote URL") {
            Ok(()) => Ok(Validation::Valid),
            Err(message) => Ok(Validation::Invalid(message.into())),
        })
        .prompt()?)
}
