use clap::{Parser, Subcommand};

/// Command-line arguments for oidc-starter
#[derive(Parser, Debug, Clone)]
#[command(name = "oidc-starter")]
#[command(about = "Create Angular starter applications with OIDC support from a template")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a new starter project from the template
    Create(CreateArgs),
}

/// Arguments for the `create` subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct CreateArgs {
    /// Name of the project to create
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Template repository URL
    #[arg(short = 't', long, value_name = "URL")]
    pub template: Option<String>,

    /// Path where the project should be created
    #[arg(short = 'p', long, value_name = "PATH", default_value = ".")]
    pub path: String,
}
