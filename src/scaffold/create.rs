//! The scaffolding orchestrator

use crate::cli::CreateArgs;
use crate::config::ProjectConfig;
use crate::config::validation::{is_valid_display_name, to_package_name};
use crate::error::ScaffoldError;
use crate::git;
use crate::prompts;
use crate::scaffold::{StepOutcome, app_config, install};
use crate::system::System;
use crate::template::{ci, substitute};
use crate::ui;
use anyhow::{Context as _, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Template cloned when `--template` is not given
const DEFAULT_TEMPLATE_URL: &str = "https://github.com/Spokay/angular-starter-app-template.git";

/// Coordinates the complete create operation
///
/// Sequencing is strict: fetch before substitute, substitute and prune
/// before emit and install, all file mutation before dependency
/// installation. Validation and fetch/substitution failures abort the run;
/// CI pruning, dependency installation, and git initialization degrade to
/// warnings.
#[non_exhaustive]
pub struct CreateOperation<'src> {
    args: CreateArgs,
    system: &'src dyn System,
}

impl<'src> CreateOperation<'src> {
    /// Validate the project name and build the operation
    ///
    /// # Errors
    ///
    /// Returns an error if the project name is empty or cannot be normalized
    /// into a valid package identifier.
    #[inline]
    pub fn new(args: CreateArgs, system: &'src dyn System) -> Result<Self> {
        if args.project_name.trim().is_empty() {
            return Err(ScaffoldError::validation("Project name is required".to_owned()).into());
        }

        if !is_valid_display_name(&args.project_name) {
            return Err(ScaffoldError::validation(
                "Project name must contain at least one alphanumeric character".to_owned(),
            )
            .into());
        }

        Ok(Self { args, system })
    }

    /// Execute the scaffolding pipeline
    ///
    /// # Errors
    ///
    /// Returns an error on validation, fetch, substitution, or emit
    /// failures. Declining to overwrite an existing directory is a clean
    /// abort, not an error.
    #[inline]
    pub fn execute(&self) -> Result<()> {
        ui::print_header();

        let display_name = self.args.project_name.trim().to_owned();
        let package_name = to_package_name(&display_name);

        info!("Project name: {display_name}");
        info!("Package name: {package_name}");

        let target_path = Path::new(&self.args.path).join(&package_name);

        if self.system.exists(&target_path) && !self.confirm_overwrite(&package_name, &target_path)?
        {
            info!("Aborted.");
            return Ok(());
        }

        let config = prompts::collect_configuration(display_name, package_name)?;

        git::check_git_availability()?;

        let template_url = self.args.template.as_deref().unwrap_or(DEFAULT_TEMPLATE_URL);
        self.fetch(template_url, &target_path)?;

        let rewritten = substitute::substitute_tokens(self.system, &target_path, &config)?;
        info!("Configuration tokens replaced in {rewritten} files");

        match ci::prune(self.system, &target_path, config.vcs_host) {
            Ok(()) => info!("CI configured for {}", config.vcs_host),
            Err(err) => StepOutcome::degraded(format!(
                "Could not fully configure CI files: {err:#}. Remove the unused CI config manually."
            ))
            .report(),
        }

        app_config::emit(self.system, &target_path, &config)?;
        info!("{} generated", app_config::APP_CONFIG_PATH);

        self.install(&target_path, &config).report();

        self.initialize_git(&target_path)?.report();

        ui::print_success(&config);

        Ok(())
    }

    /// Ask before destroying a pre-existing target directory
    fn confirm_overwrite(&self, package_name: &str, target_path: &Path) -> Result<bool> {
        let overwrite = prompts::confirm_overwrite(package_name)?;
        if overwrite {
            self.system
                .remove_dir_all(target_path)
                .with_context(|| format!("Failed to remove {}", target_path.display()))?;
        }

        Ok(overwrite)
    }

    /// Clone the template behind a progress spinner
    fn fetch(&self, template_url: &str, target_path: &Path) -> Result<()> {
        let spinner = step_spinner("Cloning template repository...");
        let result = git::fetch_template(self.system, template_url, target_path);

        match &result {
            Ok(()) => spinner.finish_with_message("Template cloned successfully"),
            Err(_) => spinner.finish_with_message("Failed to clone template"),
        }

        result
    }

    /// Install dependencies behind a progress spinner
    fn install(&self, target_path: &Path, config: &ProjectConfig) -> StepOutcome {
        let spinner = step_spinner(&format!(
            "Installing dependencies with {}...",
            config.package_manager
        ));
        let outcome = install::install_dependencies(target_path, config.package_manager);

        match &outcome {
            StepOutcome::Completed => spinner.finish_with_message("Dependencies installed"),
            StepOutcome::Degraded { .. } => {
                spinner.finish_with_message("Dependency installation skipped");
            }
        }

        outcome
    }

    /// Optionally initialize a git repository and attach a remote
    fn initialize_git(&self, target_path: &Path) -> Result<StepOutcome> {
        if !prompts::confirm_git_init()? {
            debug!("Skipping git initialization");
            return Ok(StepOutcome::Completed);
        }

        let outcome = git::init::initialize_repository(target_path);
        if outcome != StepOutcome::Completed {
            return Ok(outcome);
        }

        if prompts::confirm_add_remote()? {
            let remote_url = prompts::prompt_remote_url()?;
            return Ok(git::init::add_remote(target_path, &remote_url));
        }

        Ok(StepOutcome::Completed)
    }
}

/// Spinner shown while a blocking external step runs
fn step_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("spinner template is valid"),
    );
    spinner.set_message(message.to_owned());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
