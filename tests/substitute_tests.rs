//! Unit tests for the token substitution engine

#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use oidc_starter::config::{PackageManager, ProjectConfig, VcsHost};
    use oidc_starter::system::{MockSystem, System as _};
    use oidc_starter::template::substitute_tokens;
    use std::path::Path;

    fn sample_config(vcs_host: VcsHost, use_proxy: bool) -> ProjectConfig {
        ProjectConfig {
            display_name: "My Awesome App".to_owned(),
            package_name: "my-awesome-app".to_owned(),
            oidc_authority: "https://idp.example.com/realms/test-realm".to_owned(),
            oidc_client_id: "spa-client".to_owned(),
            redirect_url: "http://localhost:4200".to_owned(),
            resource_server_url: "http://localhost:8080".to_owned(),
            vcs_host,
            package_manager: PackageManager::Npm,
            node_version: "20".to_owned(),
            use_proxy,
        }
    }

    #[test]
    fn replaces_manifest_tokens() {
        let system = MockSystem::new()
            .with_dir("/app")
            .unwrap()
            .with_file(
                "/app/package.json",
                b"{\"name\": \"__APP_NAME__\", \"description\": \"__APP_DISPLAY_NAME__\"}",
            )
            .unwrap();

        let config = sample_config(VcsHost::Github, false);
        let rewritten = substitute_tokens(&system, Path::new("/app"), &config).unwrap();

        assert_eq!(rewritten, 1);
        let content = system
            .read_to_string(Path::new("/app/package.json"))
            .unwrap();
        assert!(content.contains("\"name\": \"my-awesome-app\""));
        assert!(content.contains("\"description\": \"My Awesome App\""));
        assert!(!content.contains("__APP_NAME__"));
    }

    #[test]
    fn absent_files_are_skipped_silently() {
        let system = MockSystem::new()
            .with_dir("/app")
            .unwrap()
            .with_file("/app/README.md", b"# __APP_DISPLAY_NAME__\n")
            .unwrap();

        let config = sample_config(VcsHost::Github, false);
        let rewritten = substitute_tokens(&system, Path::new("/app"), &config).unwrap();

        assert_eq!(rewritten, 1);
        let content = system.read_to_string(Path::new("/app/README.md")).unwrap();
        assert_eq!(content, "# My Awesome App\n");
    }

    #[test]
    fn missing_target_directory_is_an_error() {
        let system = MockSystem::new();
        let config = sample_config(VcsHost::Github, false);

        let result = substitute_tokens(&system, Path::new("/nowhere"), &config);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Target directory does not exist")
        );
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let system = MockSystem::new()
            .with_dir("/app")
            .unwrap()
            .with_file(
                "/app/package.json",
                b"{\"name\": \"__APP_NAME__\", \"engines\": {\"node\": \"__NODE_VERSION__\"}}",
            )
            .unwrap();

        let config = sample_config(VcsHost::Github, false);

        let first = substitute_tokens(&system, Path::new("/app"), &config).unwrap();
        let after_first = system
            .read_to_string(Path::new("/app/package.json"))
            .unwrap();

        let second = substitute_tokens(&system, Path::new("/app"), &config).unwrap();
        let after_second = system
            .read_to_string(Path::new("/app/package.json"))
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 0);
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn processes_only_the_selected_ci_file() {
        let system = MockSystem::new()
            .with_dir("/app")
            .unwrap()
            .with_file(
                "/app/.github/workflows/ci.yml",
                b"node-version: \"__NODE_VERSION__\"\n",
            )
            .unwrap()
            .with_file("/app/.gitlab-ci.yml", b"image: node:__NODE_VERSION__\n")
            .unwrap();

        let config = sample_config(VcsHost::Github, false);
        substitute_tokens(&system, Path::new("/app"), &config).unwrap();

        let workflow = system
            .read_to_string(Path::new("/app/.github/workflows/ci.yml"))
            .unwrap();
        let gitlab_ci = system
            .read_to_string(Path::new("/app/.gitlab-ci.yml"))
            .unwrap();

        assert_eq!(workflow, "node-version: \"20\"\n");
        assert_eq!(gitlab_ci, "image: node:__NODE_VERSION__\n");
    }

    #[test]
    fn proxy_mode_rewrites_secure_routes_and_serve_options() {
        let system = MockSystem::new()
            .with_dir("/app")
            .unwrap()
            .with_file(
                "/app/angular.json",
                b"{\"options\": {\"port\": 4200__PROXY_CONFIG__}, \"secureRoutes\": [__SECURE_ROUTES__]}",
            )
            .unwrap();

        let config = sample_config(VcsHost::Github, true);
        substitute_tokens(&system, Path::new("/app"), &config).unwrap();

        let content = system
            .read_to_string(Path::new("/app/angular.json"))
            .unwrap();
        assert!(content.contains("\"secureRoutes\": [\"/api\"]"));
        assert!(content.contains("\"proxyConfig\": \"src/proxy.conf.json\""));
    }

    #[test]
    fn literal_backend_url_without_proxy() {
        let system = MockSystem::new()
            .with_dir("/app")
            .unwrap()
            .with_file(
                "/app/angular.json",
                b"{\"options\": {\"port\": 4200__PROXY_CONFIG__}, \"secureRoutes\": [__SECURE_ROUTES__]}",
            )
            .unwrap();

        let config = sample_config(VcsHost::Github, false);
        substitute_tokens(&system, Path::new("/app"), &config).unwrap();

        let content = system
            .read_to_string(Path::new("/app/angular.json"))
            .unwrap();
        assert!(content.contains("\"secureRoutes\": [\"http://localhost:8080\"]"));
        assert!(content.contains("{\"port\": 4200}"));
    }
}
