//! Configuration management for newsdesk.
//!
//! Configuration is read from `~/.config/newsdesk/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod sections;

pub use sections::{ApiConfig, ListingConfig, ServerConfig};

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub server: ServerConfig,
    pub listing: ListingConfig,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// A missing file is created with commented defaults. Missing fields use
    /// default values; an unparsable file is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/newsdesk/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("newsdesk").join("config.toml"))
    }

    /// Get the default database path: `~/.local/share/newsdesk/newsdesk.db`
    pub fn default_db_path() -> Result<PathBuf, ConfigError> {
        let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
        Ok(data_dir.join("newsdesk").join("newsdesk.db"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::info!("Wrote default config to {}", path.display());
        Ok(())
    }

    fn default_config_content() -> &'static str {
        r##"# newsdesk configuration
#
# Every setting is optional; anything left out uses the value shown here.

[api]
# Ask the backend first and fall back to the built-in catalog when it
# fails or has nothing
use_remote = false

# Backend base URL, API prefix included. `newsdesk serve` listens here.
base_url = "http://127.0.0.1:8080/api/v1/"

# Request timeout in seconds
timeout_secs = 10

# Use an in-process fake backend instead of HTTP
use_fake = false
fake_delay_min_ms = 100
fake_delay_max_ms = 800
fake_error_rate = 0.05

[server]
host = "127.0.0.1"
port = 8080

# Random latency injected into responses
delay_probability = 0.1
delay_min_ms = 100
delay_max_ms = 500

# Share of requests answered with a simulated 500
error_rate = 0.05

[listing]
# Articles per page in list output
page_size = 10

# Page size requested from the backend per category
category_fetch_limit = 20
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
