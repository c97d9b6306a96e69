//! Server configuration.

use std::net::SocketAddr;

use crate::store::StoreConfig;

/// Environment variable naming the dataset file.
pub const DATABASE_VAR: &str = "CLIMATE_DATABASE";

/// Environment variable for the listen address.
pub const BIND_ADDR_VAR: &str = "CLIMATE_BIND_ADDR";

/// Environment variable for the store pool size.
pub const MAX_CONNECTIONS_VAR: &str = "CLIMATE_MAX_CONNECTIONS";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid {name}={value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the HTTP server and its dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Dataset location and pool size
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(DATABASE_VAR) {
            config.store.path = path.into();
        }

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    name: BIND_ADDR_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(MAX_CONNECTIONS_VAR) {
            let max = match value.parse::<u32>() {
                Ok(0) => Err("must be at least 1".to_string()),
                Ok(n) => Ok(n),
                Err(e) => Err(e.to_string()),
            };
            config.store.max_connections = max.map_err(|reason| ConfigError::Invalid {
                name: MAX_CONNECTIONS_VAR,
                value,
                reason,
            })?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            store: StoreConfig::default(),
        }
    }
}
