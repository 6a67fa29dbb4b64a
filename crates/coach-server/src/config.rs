//! Server Configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SITE_DIR: &str = "dist";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("SITE_DIR must not be empty")]
    EmptySiteDir,
}

/// Where to listen and what to serve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,

    /// Directory holding the built frontend (`index.html` + wasm bundle)
    pub site_dir: PathBuf,
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, falling back to defaults for missing keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: addr.clone(),
                source,
            })?;

        let site_dir = lookup("SITE_DIR").unwrap_or_else(|| DEFAULT_SITE_DIR.into());
        if site_dir.trim().is_empty() {
            return Err(ConfigError::EmptySiteDir);
        }

        Ok(Self {
            bind_addr,
            site_dir: PathBuf::from(site_dir.trim()),
        })
    }

    /// Page served for any path that is not a file
    pub fn index_file(&self) -> PathBuf {
        self.site_dir.join("index.html")
    }
}
