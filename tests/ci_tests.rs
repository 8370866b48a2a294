//! Unit tests for CI configuration pruning

use oidc_starter::config::VcsHost;
use oidc_starter::system::{MockSystem, System as _};
use oidc_starter::template::ci::prune;
use std::path::Path;

#[test]
fn github_host_removes_gitlab_ci_only() {
    let system = MockSystem::new()
        .with_file("/app/.gitlab-ci.yml", b"image: node:20")
        .unwrap()
        .with_file("/app/.github/workflows/ci.yml", b"name: ci")
        .unwrap();

    prune(&system, Path::new("/app"), VcsHost::Github).unwrap();

    assert!(!system.exists(Path::new("/app/.gitlab-ci.yml")));
    assert!(system.is_file(Path::new("/app/.github/workflows/ci.yml")));
}

#[test]
fn gitlab_host_removes_github_directory_only() {
    let system = MockSystem::new()
        .with_file("/app/.gitlab-ci.yml", b"image: node:20")
        .unwrap()
        .with_file("/app/.github/workflows/ci.yml", b"name: ci")
        .unwrap()
        .with_file("/app/.github/dependabot.yml", b"version: 2")
        .unwrap();

    prune(&system, Path::new("/app"), VcsHost::Gitlab).unwrap();

    assert!(!system.exists(Path::new("/app/.github")));
    assert!(!system.exists(Path::new("/app/.github/workflows/ci.yml")));
    assert!(!system.exists(Path::new("/app/.github/dependabot.yml")));
    assert!(system.is_file(Path::new("/app/.gitlab-ci.yml")));
}

#[test]
fn absence_of_the_pruned_target_is_not_an_error() {
    let system = MockSystem::new().with_dir("/app").unwrap();

    prune(&system, Path::new("/app"), VcsHost::Github).unwrap();
    prune(&system, Path::new("/app"), VcsHost::Gitlab).unwrap();
}
