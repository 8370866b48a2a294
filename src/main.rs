//! # `oidc-starter`
//!
//! `oidc-starter` is a command-line scaffolder for Angular starter
//! applications with OpenID Connect authentication wired in. It clones a
//! template repository, asks for identity-provider and backend settings,
//! rewrites the template's placeholder tokens, keeps the CI configuration of
//! the chosen VCS host, emits the runtime configuration file, installs
//! dependencies, and can initialize a fresh git repository.
//!
//! ## Usage
//!
//! ```sh
//! oidc-starter create my-app
//! ```
//!
//! **With a custom template and destination:**
//!
//! ```sh
//! oidc-starter create my-app --template https://github.com/you/template.git --path ./projects
//! ```
//!
//! See `oidc-starter --help` for more options and details.

use anyhow::Result;
use clap::Parser as _;
use oidc_starter::cli::Args;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbose flag
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    match oidc_starter::run(args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            oidc_starter::ui::print_error(&format!("{err:#}"));
            std::process::exit(1);
        }
    }
}
