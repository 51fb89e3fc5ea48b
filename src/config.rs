//! Layered service configuration.
//!
//! Values come from built-in defaults, then an optional
//! `config/chatlens.toml` file, then `CHATLENS__`-prefixed environment
//! variables (`CHATLENS__SERVER__PORT=9000` overrides `server.port`).

use serde::Deserialize;

/// Top-level configuration for the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Service identity and logging.
    #[serde(default)]
    pub service: ServiceConfig,
    /// HTTP listener.
    #[serde(default)]
    pub server: ServerConfig,
    /// On-disk storage locations.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Service-level settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Service name for logging.
    #[serde(default = "default_service_name")]
    pub name: String,
    /// Log level when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Storage locations.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Flat directory holding uploaded media, also served at `/static`.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Path of the embedded feedback database.
    #[serde(default = "default_feedback_db")]
    pub feedback_db: String,
}

fn default_service_name() -> String {
    "chatlens".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_upload_dir() -> String {
    "uploads".to_string()
}

fn default_feedback_db() -> String {
    "feedback.db".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
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

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            feedback_db: default_feedback_db(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment sources.
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/chatlens").required(false))
            .add_source(
                config::Environment::with_prefix("CHATLENS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize().map_err(Into::into)
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
