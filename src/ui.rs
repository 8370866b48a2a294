//! User-facing banners

use crate::config::ProjectConfig;
use crate::scaffold::app_config::APP_CONFIG_PATH;
use console::style;

/// Print the CLI header
pub fn print_header() {
    println!();
    println!(
        "{}",
        style("oidc-starter - Angular OIDC scaffolder").blue().bold()
    );
    println!();
}

/// Print the success banner with next steps and a configuration recap
pub fn print_success(config: &ProjectConfig) {
    let run = config.package_manager.run_prefix();

    println!();
    println!(
        "{}",
        style(format!(
            "Project \"{}\" created successfully!",
            config.package_name
        ))
        .green()
        .bold()
    );
    println!();
    println!("{}", style("Next steps:").cyan().bold());
    println!("  cd {}", config.package_name);
    println!("  {run} start          # Start dev server");
    println!("  {run} test           # Run unit tests");
    println!();
    println!("{}", style("Configuration:").cyan().bold());
    println!("  - OIDC authority: {}", config.oidc_authority);
    println!("  - Resource server: {}", config.resource_server_url);
    println!(
        "  - Proxy: {}",
        if config.use_proxy { "enabled" } else { "disabled" }
    );
    println!("  - Edit {APP_CONFIG_PATH} to change runtime config");
    println!();
}

/// Print the error banner
pub fn print_error(message: &str) {
    eprintln!();
    eprintln!("{}", style(format!("Error: {message}")).red().bold());
    eprintln!();
}
