//! Configuration loading and config file resolution
//!
//! Bootstrap settings only: where the upstream API lives, how long to wait
//! for it, where to listen and how loudly to log. Every field has a built-in
//! default so a missing file never prevents startup.
//!
//! # Settings Sources Priority
//!
//! 1. Command-line arguments (`ConfigOverrides`)
//! 2. Environment variables (`GROUPIE_CONFIG`, `GROUPIE_UPSTREAM_URL`)
//! 3. TOML configuration file
//! 4. Built-in defaults

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "GROUPIE_CONFIG";

/// Environment variable overriding the upstream index URL
pub const UPSTREAM_ENV_VAR: &str = "GROUPIE_UPSTREAM_URL";

/// Default upstream index document
pub const DEFAULT_INDEX_URL: &str = "https://groupietrackers.herokuapp.com/api";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upstream API settings
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// URL of the index document listing the four collection URLs
    #[serde(default = "default_index_url")]
    pub index_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_index_url() -> String {
    DEFAULT_INDEX_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    format!("groupie/{}", env!("CARGO_PKG_VERSION"))
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            index_url: default_index_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl UpstreamConfig {
    /// Get upstream request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl ServerConfig {
    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Command-line configuration overrides
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub upstream: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Resolve which config file to read
///
/// Paths named on the CLI or in the environment are returned as-is, so a
/// missing explicit file surfaces as an error on read. The platform default
/// is only returned when it exists.
pub fn resolve_config_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: Platform config directory
    dirs::config_dir()
        .map(|d| d.join("groupie").join("config.toml"))
        .filter(|p| p.exists())
}

/// Parse a TOML config file
pub fn read_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path, e)))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse TOML {:?}: {}", path, e)))
}

/// Load complete configuration
///
/// When no config file can be found the built-in defaults are used with a
/// warning. Environment and CLI overrides are applied on top, then the
/// result is validated.
pub fn load_config(overrides: &ConfigOverrides) -> Result<TomlConfig> {
    let mut config = match resolve_config_path(overrides.config_path.as_deref()) {
        Some(path) => {
            let config = read_toml_config(&path)?;
            info!("Loaded configuration from {:?}", path);
            config
        }
        None => {
            warn!("No config file found, using built-in defaults");
            TomlConfig::default()
        }
    };

    if let Ok(url) = std::env::var(UPSTREAM_ENV_VAR) {
        if !url.trim().is_empty() {
            info!("Upstream index URL from {}", UPSTREAM_ENV_VAR);
            config.upstream.index_url = url;
        }
    }

    if let Some(url) = &overrides.upstream {
        config.upstream.index_url = url.clone();
    }
    if let Some(host) = &overrides.host {
        config.server.host = host.clone();
    }
    if let Some(port) = overrides.port {
        config.server.port = port;
    }

    validate(&config)?;
    Ok(config)
}

fn validate(config: &TomlConfig) -> Result<()> {
    if config.upstream.timeout_ms == 0 {
        return Err(Error::Config("upstream.timeout_ms must be greater than 0".to_string()));
    }
    if config.upstream.index_url.trim().is_empty() {
        return Err(Error::Config("upstream.index_url cannot be empty".to_string()));
    }
    Ok(())
}
