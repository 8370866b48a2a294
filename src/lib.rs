//! `oidc-starter` - A CLI tool for scaffolding OIDC-enabled Angular starter
//! applications.
//!
//! This library clones a template repository, collects identity-provider and
//! backend settings through interactive prompts, rewrites placeholder tokens
//! in the cloned files, prunes the CI configuration of the unused VCS host,
//! emits the runtime `app-config.json`, installs dependencies, and optionally
//! initializes a git repository.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod prompts;
pub mod scaffold;
pub mod system;
pub mod template;
pub mod ui;

use anyhow::Result;
use cli::{Args, Command};
use scaffold::create::CreateOperation;
use system::RealSystem;

/// Main entry point for the oidc-starter library
pub fn run(args: Args) -> Result<()> {
    let system = RealSystem::new();

    match args.command {
        Command::Create(create_args) => {
            let operation = CreateOperation::new(create_args, &system)?;
            operation.execute()
        }
    }
}
