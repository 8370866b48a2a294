//! The static token table driving template substitution
//!
//! The engine is deliberately not a template language: a fixed list of
//! relative paths and an ordered table of literal placeholders, rebuilt from
//! the configuration record on every run.

use crate::config::project::CLI_PACKAGE;
use crate::config::{ProjectConfig, VcsHost};
use regex::Regex;
use std::sync::LazyLock;

/// CI file kept when the VCS host is GitHub
pub const GITHUB_CI_FILE: &str = ".github/workflows/ci.yml";

/// CI file kept when the VCS host is GitLab
pub const GITLAB_CI_FILE: &str = ".gitlab-ci.yml";

/// Relative paths rewritten on every run, independent of the VCS host.
/// Files the template does not ship are skipped, not an error.
const TEMPLATE_FILES: &[&str] = &[
    "package.json",
    "angular.json",
    "src/app/app.spec.ts",
    "README.md",
    "public/assets/app-config.json",
    "src/proxy.conf.json",
];

/// Fallback realm when the authority URL carries no realm segment
const DEFAULT_REALM: &str = "my-realm";

static REALM_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/realms/([^/]+)").expect("pattern compiles"));

/// Relative paths to rewrite for the given VCS host
#[must_use]
pub fn files_to_process(vcs_host: VcsHost) -> Vec<&'static str> {
    let mut files = TEMPLATE_FILES.to_vec();
    files.push(match vcs_host {
        VcsHost::Github => GITHUB_CI_FILE,
        VcsHost::Gitlab => GITLAB_CI_FILE,
    });
    files
}

/// Extract the realm segment from an OIDC authority URL
///
/// `https://idp.example.com/realms/test-realm` yields `test-realm`; URLs
/// without a `/realms/` segment yield the `my-realm` default.
#[must_use]
pub fn extract_realm(authority: &str) -> String {
    REALM_SEGMENT
        .captures(authority)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| DEFAULT_REALM.to_owned(), |m| m.as_str().to_owned())
}

/// Build the ordered placeholder table for one scaffolding run
///
/// Placeholder keys are mutually non-overlapping and no replacement value
/// produces another placeholder, so substitution order cannot change the
/// result. Preserve both properties when adding tokens.
#[must_use]
pub fn build_token_map(config: &ProjectConfig) -> Vec<(&'static str, String)> {
    vec![
        ("__APP_NAME__", config.package_name.clone()),
        ("__APP_DISPLAY_NAME__", config.display_name.clone()),
        ("__OIDC_AUTHORITY__", config.oidc_authority.clone()),
        ("__CLIENT_ID__", config.oidc_client_id.clone()),
        ("__REDIRECT_URL__", config.redirect_url.clone()),
        ("__POST_LOGOUT_REDIRECT_URL__", config.redirect_url.clone()),
        ("__BACKEND_URL__", config.resource_server_url.clone()),
        ("__SECURE_ROUTES__", secure_routes_value(config)),
        ("__PROXY_CONFIG__", proxy_config_fragment(config)),
        ("__REALM__", extract_realm(&config.oidc_authority)),
        ("__NODE_VERSION__", config.node_version.clone()),
        ("__PKG_MGR__", config.package_manager.command().to_owned()),
        (
            "__PKG_MGR_RUN__",
            config.package_manager.run_prefix().to_owned(),
        ),
        ("__CLI_PACKAGE__", CLI_PACKAGE.to_owned()),
    ]
}

/// Quoted value wired into the template's secure-route list: the proxy path
/// in proxy mode, the literal backend URL otherwise
fn secure_routes_value(config: &ProjectConfig) -> String {
    if config.use_proxy {
        "\"/api\"".to_owned()
    } else {
        format!("\"{}\"", config.resource_server_url)
    }
}

/// Comma-prefixed serve-target fragment enabling the dev proxy, or nothing
fn proxy_config_fragment(config: &ProjectConfig) -> String {
    if config.use_proxy {
        ",\n            \"proxyConfig\": \"src/proxy.conf.json\"".to_owned()
    } else {
        String::new()
    }
}
