use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "parley.toml",
    "config/parley.toml",
    "crates/config/parley.toml",
    "../parley.toml",
    "../config/parley.toml",
    "../crates/config/parley.toml",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub grpc: GrpcConfig,
    pub database: DatabaseConfig,
    pub access: AccessConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrpcConfig {
    pub address: String,
    pub port: u16,
    /// Server-side deadline applied to every inbound call.
    #[serde(default = "GrpcConfig::default_request_timeout")]
    pub request_timeout_ms: u64,
}

impl GrpcConfig {
    const fn default_request_timeout() -> u64 {
        5_000
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 50052,
            request_timeout_ms: Self::default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://parley.db".to_string(),
            max_connections: 10,
        }
    }
}

/// Location of the access-control service consulted for every inbound call.
///
/// ```
/// use parley_config::AccessConfig;
///
/// let access = AccessConfig::default();
/// assert_eq!(access.endpoint, "http://127.0.0.1:50051");
/// assert_eq!(access.timeout().as_millis(), 2000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    pub endpoint: String,
    #[serde(default = "AccessConfig::default_timeout")]
    pub timeout_ms: u64,
}

impl AccessConfig {
    const fn default_timeout() -> u64 {
        2_000
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:50051".to_string(),
            timeout_ms: Self::default_timeout(),
        }
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use parley_config::load;
///
/// std::env::remove_var("PARLEY_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.grpc.address.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder()
        .set_default("grpc.address", defaults.grpc.address.clone())?
        .set_default("grpc.port", i64::from(defaults.grpc.port))?
        .set_default(
            "grpc.request_timeout_ms",
            i64::try_from(defaults.grpc.request_timeout_ms).unwrap_or(i64::MAX),
        )?
        .set_default("database.url", defaults.database.url.clone())?
        .set_default(
            "database.max_connections",
            i64::from(defaults.database.max_connections),
        )?
        .set_default("access.endpoint", defaults.access.endpoint.clone())?
        .set_default(
            "access.timeout_ms",
            i64::try_from(defaults.access.timeout_ms).unwrap_or(i64::MAX),
        )?;

    let environment_overrides = config::Environment::with_prefix("PARLEY").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("PARLEY_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via PARLEY_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    if config.database.max_connections == 0 {
        anyhow::bail!("database.max_connections must be at least 1");
    }

    debug!(?config, "loaded backend configuration");
    Ok(config)
}
