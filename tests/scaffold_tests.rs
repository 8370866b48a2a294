//! Integration tests for the substitute -> prune -> emit pipeline on a real
//! filesystem

use oidc_starter::config::{PackageManager, ProjectConfig, VcsHost};
use oidc_starter::scaffold::app_config;
use oidc_starter::system::RealSystem;
use oidc_starter::template::{ci, substitute_tokens};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn sample_config(vcs_host: VcsHost) -> ProjectConfig {
    ProjectConfig {
        display_name: "My Awesome App".to_owned(),
        package_name: "my-awesome-app".to_owned(),
        oidc_authority: "https://idp.example.com/realms/test-realm".to_owned(),
        oidc_client_id: "spa-client".to_owned(),
        redirect_url: "http://localhost:4200".to_owned(),
        resource_server_url: "http://localhost:8080".to_owned(),
        vcs_host,
        package_manager: PackageManager::Pnpm,
        node_version: "20".to_owned(),
        use_proxy: false,
    }
}

/// Lay out a minimal template tree carrying the placeholder vocabulary
fn write_template(root: &Path) {
    fs::create_dir_all(root.join("src/app")).unwrap();
    fs::create_dir_all(root.join(".github/workflows")).unwrap();

    fs::write(
        root.join("package.json"),
        "{\"name\": \"__APP_NAME__\", \"engines\": {\"node\": \"__NODE_VERSION__\"}}",
    )
    .unwrap();
    fs::write(
        root.join("angular.json"),
        "{\"projects\": {\"__APP_NAME__\": {}}, \"secureRoutes\": [__SECURE_ROUTES__]}",
    )
    .unwrap();
    fs::write(
        root.join("README.md"),
        "# __APP_DISPLAY_NAME__\n\nRun `__PKG_MGR_RUN__ start`. Generated by __CLI_PACKAGE__.\n",
    )
    .unwrap();
    fs::write(
        root.join("src/app/app.spec.ts"),
        "describe('__APP_DISPLAY_NAME__', () => {});\n",
    )
    .unwrap();
    fs::write(
        root.join(".github/workflows/ci.yml"),
        "node-version: \"__NODE_VERSION__\"\n",
    )
    .unwrap();
    fs::write(root.join(".gitlab-ci.yml"), "image: node:__NODE_VERSION__\n").unwrap();
}

#[test]
fn github_scaffold_end_to_end() {
    let system = RealSystem::new();
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("my-awesome-app");
    write_template(&target);

    let config = sample_config(VcsHost::Github);

    substitute_tokens(&system, &target, &config).unwrap();
    ci::prune(&system, &target, config.vcs_host).unwrap();
    app_config::emit(&system, &target, &config).unwrap();

    // Manifest name field equals the package name
    let manifest: Value =
        serde_json::from_str(&fs::read_to_string(target.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "my-awesome-app");
    assert_eq!(manifest["engines"]["node"], "20");

    // Runtime config exists with the provided client id
    let app_config: Value = serde_json::from_str(
        &fs::read_to_string(target.join("public/assets/app-config.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(app_config["oidc"]["clientId"], "spa-client");

    // Exactly one CI file remains, substituted
    assert!(target.join(".github/workflows/ci.yml").is_file());
    assert!(!target.join(".gitlab-ci.yml").exists());
    let workflow = fs::read_to_string(target.join(".github/workflows/ci.yml")).unwrap();
    assert_eq!(workflow, "node-version: \"20\"\n");

    // Remaining template files carry no placeholders
    let readme = fs::read_to_string(target.join("README.md")).unwrap();
    assert!(readme.contains("# My Awesome App"));
    assert!(readme.contains("pnpm start"));
    assert!(readme.contains("oidc-starter"));
    assert!(!readme.contains("__"));
}

#[test]
fn gitlab_scaffold_keeps_only_gitlab_ci() {
    let system = RealSystem::new();
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("my-awesome-app");
    write_template(&target);

    let config = sample_config(VcsHost::Gitlab);

    substitute_tokens(&system, &target, &config).unwrap();
    ci::prune(&system, &target, config.vcs_host).unwrap();
    app_config::emit(&system, &target, &config).unwrap();

    assert!(!target.join(".github").exists());
    assert!(target.join(".gitlab-ci.yml").is_file());

    let gitlab_ci = fs::read_to_string(target.join(".gitlab-ci.yml")).unwrap();
    assert_eq!(gitlab_ci, "image: node:20\n");
}

#[test]
fn secure_routes_substitution_uses_the_literal_backend_url() {
    let system = RealSystem::new();
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("my-awesome-app");
    write_template(&target);

    let config = sample_config(VcsHost::Github);
    substitute_tokens(&system, &target, &config).unwrap();

    let angular = fs::read_to_string(target.join("angular.json")).unwrap();
    assert!(angular.contains("\"secureRoutes\": [\"http://localhost:8080\"]"));
}
