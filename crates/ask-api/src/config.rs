//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Ask server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Directory served for `/` and any unmatched path.
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ASK_ADDR` | Server bind address | `0.0.0.0:8000` |
    /// | `STATIC_DIR` | Static asset directory | `static` |
    ///
    /// Provider credentials are read by the brain and tool crates.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr_value = env::var("ASK_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let addr = addr_value
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(addr_value))?;

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Ok(Self { addr, static_dir })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ASK_ADDR format: {0}")]
    InvalidAddr(String),
}
