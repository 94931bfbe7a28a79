//! Configuration loading for the docbase service.
//!
//! A small TOML file plus DOCBASE_* environment overrides; every
//! setting has a default so the server runs with no config at all.

use crate::core::error::{DocbaseError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Display name advertised in serverInfo and the root descriptor
    #[serde(default = "default_name")]
    pub name: String,

    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_name() -> String {
    "Local Knowledge Base".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            host: default_host(),
            port: default_port(),
        }
    }
}

/// XDG config file location (~/.config/docbase/config.toml)
fn xdg_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docbase").join("config.toml"))
}

impl Config {
    /// Read configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocbaseError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. DOCBASE_CONFIG env var
    /// 2. XDG config file (~/.config/docbase/config.toml)
    /// 3. ./docbase.toml
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCBASE_CONFIG") {
            Self::from_file(config_path)?
        } else if let Some(xdg_config) = xdg_config_file().filter(|p| p.exists()) {
            Self::from_file(xdg_config)?
        } else if Path::new("docbase.toml").exists() {
            Self::from_file("docbase.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Apply DOCBASE_* environment overrides
    pub fn merge_env(&mut self) {
        if let Ok(name) = env::var("DOCBASE_SERVER_NAME") {
            if !name.is_empty() {
                self.server.name = name;
            }
        }
        if let Ok(host) = env::var("DOCBASE_HOST") {
            if !host.is_empty() {
                self.server.host = host;
            }
        }
        if let Ok(port) = env::var("DOCBASE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
    }

    /// Reject unusable settings before binding
    pub fn validate(&self) -> Result<()> {
        if self.server.name.is_empty() {
            return Err(DocbaseError::ConfigError(
                "Server name must be non-empty".to_string(),
            ));
        }

        if self.server.host.is_empty() {
            return Err(DocbaseError::ConfigError(
                "Host must be non-empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(DocbaseError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log the effective configuration at startup
    pub fn log_config(&self) {
        tracing::info!("Server name: {}", self.server.name);
        tracing::info!("Bind address: {}:{}", self.server.host, self.server.port);
    }
}
