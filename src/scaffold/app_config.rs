//! Runtime configuration emitter

use crate::config::ProjectConfig;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed location of the runtime configuration inside the project
pub const APP_CONFIG_PATH: &str = "public/assets/app-config.json";

/// OAuth scope requested by the generated application
const OIDC_SCOPE: &str = "openid profile email";

/// Authorization-code flow response type
const OIDC_RESPONSE_TYPE: &str = "code";

/// Runtime configuration document read by the generated application at
/// startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub oidc: OidcSection,
    #[serde(rename = "resourceServer")]
    pub resource_server: ResourceServerSection,
}

/// OIDC client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcSection {
    pub authority: String,
    pub client_id: String,
    pub redirect_url: String,
    pub post_logout_redirect_uri: String,
    pub scope: String,
    pub response_type: String,
    pub secure_routes: Vec<String>,
}

/// Resource-server base URL
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceServerSection {
    pub base_url: String,
}

impl AppConfig {
    /// Build the document from a configuration record
    #[must_use]
    pub fn from_project(config: &ProjectConfig) -> Self {
        Self {
            oidc: OidcSection {
                authority: config.oidc_authority.clone(),
                client_id: config.oidc_client_id.clone(),
                redirect_url: config.redirect_url.clone(),
                post_logout_redirect_uri: config.redirect_url.clone(),
                scope: OIDC_SCOPE.to_owned(),
                response_type: OIDC_RESPONSE_TYPE.to_owned(),
                secure_routes: vec![config.resource_server_url.clone()],
            },
            resource_server: ResourceServerSection {
                base_url: config.resource_server_url.clone(),
            },
        }
    }
}

/// Write `app-config.json` into the scaffolded project
///
/// Creates intermediate directories as needed and unconditionally overwrites
/// any existing file at the fixed path.
///
/// # Errors
///
/// Returns an error if the assets directory cannot be created or the file
/// cannot be written.
#[inline]
pub fn emit(system: &dyn System, target_path: &Path, config: &ProjectConfig) -> Result<()> {
    let app_config = AppConfig::from_project(config);
    let file_path = target_path.join(APP_CONFIG_PATH);

    if let Some(parent) = file_path.parent() {
        system
            .create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let contents =
        serde_json::to_string_pretty(&app_config).context("Failed to serialize app-config.json")?;

    system
        .write(&file_path, contents.as_bytes())
        .with_context(|| format!("Failed to write {}", file_path.display()))?;

    Ok(())
}
