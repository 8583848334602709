//! Test plan for the `parley-config` crate.
//!
//! These tests exercise the configuration loader across default handling,
//! file discovery, environment overrides, and validation behaviour.

use std::fs;
use std::path::{Path, PathBuf};

use serial_test::serial;
use tempfile::TempDir;

use parley_config::{load, AccessConfig, AppConfig, GrpcConfig};

const ENV_VARS_TO_RESET: &[&str] = &[
    "PARLEY_CONFIG",
    "PARLEY__ACCESS__ENDPOINT",
    "PARLEY__ACCESS__TIMEOUT_MS",
    "PARLEY__DATABASE__MAX_CONNECTIONS",
    "PARLEY__DATABASE__URL",
    "PARLEY__GRPC__ADDRESS",
    "PARLEY__GRPC__PORT",
    "PARLEY__GRPC__REQUEST_TIMEOUT_MS",
];

struct TestContext {
    vars: Vec<(String, Option<String>)>,
    original_dir: Option<PathBuf>,
}

impl TestContext {
    fn new() -> Self {
        Self {
            vars: Vec::new(),
            original_dir: None,
        }
    }

    fn reset_environment(&mut self) {
        for key in ENV_VARS_TO_RESET {
            self.remove_var(key);
        }
    }

    fn set_var(&mut self, key: &str, value: impl AsRef<str>) {
        let previous = std::env::var(key).ok();
        std::env::set_var(key, value.as_ref());
        self.vars.push((key.to_string(), previous));
    }

    fn remove_var(&mut self, key: &str) {
        let previous = std::env::var(key).ok();
        std::env::remove_var(key);
        self.vars.push((key.to_string(), previous));
    }

    fn set_current_dir(&mut self, dir: &Path) {
        if self.original_dir.is_none() {
            self.original_dir =
                Some(std::env::current_dir().expect("failed to capture current directory"));
        }
        std::env::set_current_dir(dir).expect("failed to set current directory");
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(original) = self.original_dir.take() {
            let _ = std::env::set_current_dir(original);
        }

        while let Some((key, value)) = self.vars.pop() {
            match value {
                Some(val) => std::env::set_var(&key, val),
                None => std::env::remove_var(&key),
            }
        }
    }
}

fn write_config_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create config directories");
    }
    fs::write(path, contents).expect("failed to write config file");
}

#[test]
#[serial]
fn load_uses_default_values_when_no_files_found() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    let config = load().expect("configuration load should succeed without files");
    let defaults = AppConfig::default();

    assert_eq!(config.grpc.address, defaults.grpc.address);
    assert_eq!(config.grpc.port, defaults.grpc.port);
    assert_eq!(config.grpc.request_timeout_ms, defaults.grpc.request_timeout_ms);
    assert_eq!(config.database.url, defaults.database.url);
    assert_eq!(
        config.database.max_connections,
        defaults.database.max_connections
    );
    assert_eq!(config.access.endpoint, defaults.access.endpoint);
    assert_eq!(config.access.timeout_ms, defaults.access.timeout_ms);
}

#[test]
#[serial]
fn load_picks_first_available_file_in_search_order() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    write_config_file(
        temp_dir.path(),
        "parley.toml",
        r#"
        [grpc]
        port = 4242
        "#,
    );
    write_config_file(
        temp_dir.path(),
        "config/parley.toml",
        r#"
        [grpc]
        port = 5151
        "#,
    );

    let config = load().expect("configuration load should pick the first file");
    assert_eq!(config.grpc.port, 4242);
}

#[test]
#[serial]
fn load_merges_partial_file_with_defaults() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    write_config_file(
        temp_dir.path(),
        "parley.toml",
        r#"
        [access]
        endpoint = "http://access.internal:9000"

        [database]
        max_connections = 50
        "#,
    );

    let config = load().expect("configuration load should succeed");
    let defaults = AppConfig::default();

    assert_eq!(config.access.endpoint, "http://access.internal:9000");
    assert_eq!(config.access.timeout_ms, defaults.access.timeout_ms);
    assert_eq!(config.database.max_connections, 50);
    assert_eq!(config.database.url, defaults.database.url);
    assert_eq!(config.grpc.port, defaults.grpc.port);
}

#[test]
#[serial]
fn load_honours_explicit_config_path() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    write_config_file(
        temp_dir.path(),
        "parley.toml",
        r#"
        [grpc]
        port = 1111
        "#,
    );
    write_config_file(
        temp_dir.path(),
        "elsewhere/custom.toml",
        r#"
        [grpc]
        port = 2222
        "#,
    );
    let explicit = temp_dir.path().join("elsewhere/custom.toml");
    ctx.set_var("PARLEY_CONFIG", explicit.to_string_lossy());

    let config = load().expect("configuration load should use PARLEY_CONFIG");
    assert_eq!(config.grpc.port, 2222);
}

#[test]
#[serial]
fn load_applies_environment_overrides() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    write_config_file(
        temp_dir.path(),
        "parley.toml",
        r#"
        [grpc]
        port = 3030
        "#,
    );

    ctx.set_var("PARLEY__GRPC__PORT", "8080");
    ctx.set_var("PARLEY__ACCESS__TIMEOUT_MS", "750");

    let config = load().expect("configuration load should honour env overrides");
    assert_eq!(config.grpc.port, 8080);
    assert_eq!(config.access.timeout_ms, 750);
}

#[test]
#[serial]
fn load_supports_database_url_environment_variable() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    let url = "sqlite:///var/lib/parley/chat.db";
    ctx.set_var("PARLEY__DATABASE__URL", url);

    let config = load().expect("configuration load should read database env override");
    assert_eq!(config.database.url, url);
}

#[test]
#[serial]
fn load_rejects_zero_pool_size() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    ctx.set_var("PARLEY__DATABASE__MAX_CONNECTIONS", "0");

    let error = load().expect_err("an empty pool cannot serve requests");
    assert!(error.to_string().contains("max_connections"));
}

#[test]
#[serial]
fn load_errors_on_invalid_toml_contents() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    write_config_file(
        temp_dir.path(),
        "parley.toml",
        r#"
        [grpc]
        port = "not-a-number
        "#,
    );

    let error = load().expect_err("invalid TOML should cause load to fail");
    let message = error.to_string();
    assert!(
        message.contains("invalid configuration") || message.contains("unable to build configuration"),
        "unexpected error message: {message}"
    );
}

#[test]
fn grpc_config_defaults_match_expected_host_and_port() {
    let defaults = GrpcConfig::default();
    assert_eq!(defaults.address, "127.0.0.1");
    assert_eq!(defaults.port, 50052);
    assert_eq!(defaults.bind_address(), "127.0.0.1:50052");
    assert_eq!(defaults.request_timeout().as_millis(), 5000);
}

#[test]
fn access_config_defaults_point_at_local_service() {
    let defaults = AccessConfig::default();
    assert_eq!(defaults.endpoint, "http://127.0.0.1:50051");
    assert_eq!(defaults.timeout_ms, 2000);
}
