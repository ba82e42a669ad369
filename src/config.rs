//! Server configuration, read from TOML.
//!
//! Every field has a default, so an empty file (or no file) is a valid config.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid route prefix {0:?}: must be empty or start with '/' and not end with '/'")]
    RoutePrefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    /// Mount point for the avatar route, e.g. `/pb` serves `/pb/avatar/{name}`.
    pub route_prefix: String,
    /// Longest accepted name in bytes. Unlimited when unset.
    pub max_name_bytes: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 8090)),
            route_prefix: String::new(),
            max_name_bytes: None,
        }
    }
}

impl ServerConfig {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Load the file config, then apply a `--listen` override if present.
    pub fn resolve(path: Option<&Path>, listen: Option<SocketAddr>) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        if let Some(listen) = listen {
            config.listen = listen;
        }
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.route_prefix;
        if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
            return Err(ConfigError::RoutePrefix(prefix.clone()));
        }
        Ok(())
    }

    /// Full route pattern for the avatar endpoint.
    pub fn avatar_route(&self) -> String {
        format!("{}/avatar/{{name}}", self.route_prefix)
    }
}
