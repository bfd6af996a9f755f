//! Configuration types for ratings.
//!
//! [`Config::load`] layers, lowest precedence first: the built-in defaults, an
//! optional TOML file, `RATINGS__SECTION__KEY` environment variables, and
//! finally `PORT`. [`Config::defaults`] returns the built-in defaults without
//! reading the file system or environment (useful in tests).

use crate::dataset::Compression;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

/// Upstream dataset location. Despite the name it is zlib-framed.
pub const DEFAULT_DATASET_URL: &str = "https://data.worksponsors.co.uk/master.json.gz";

const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[dataset]
url          = "https://data.worksponsors.co.uk/master.json.gz"
compression  = "zlib"
timeout_secs = 30
"#;

const ENV_PREFIX: &str = "RATINGS";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Source(#[from] config::ConfigError),
    #[error("PORT must be a TCP port number, got {0:?}")]
    InvalidPort(String),
}

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Apply the value of the `PORT` variable. Unset or empty leaves the
    /// configured port untouched.
    pub fn apply_port_var(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        match value {
            None | Some("") => Ok(()),
            Some(raw) => {
                self.port = raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
                Ok(())
            }
        }
    }
}

/// `[dataset]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_url")]
    pub url: String,
    /// Local file holding the same compressed payload. Takes precedence over
    /// `url` when set.
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub compression: Compression,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String { DEFAULT_DATASET_URL.to_string() }
fn default_timeout_secs() -> u64 { 30 }

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            path: None,
            compression: Compression::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DatasetConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. `path`, when given, must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let mut cfg: Config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        let port = std::env::var("PORT").ok();
        cfg.server.apply_port_var(port.as_deref())?;

        tracing::debug!(?cfg, "configuration loaded");
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
