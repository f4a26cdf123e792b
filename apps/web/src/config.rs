//! Web server configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. A `.env` file in the working directory, if present, is read
//! first and never overrides variables already set.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use storekeep_db::DbConfig;

/// Web server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// SQLite database file, created on first start.
    pub db_path: PathBuf,

    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,

    /// Upper bound on pooled SQLite connections.
    pub max_connections: u32,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            db_path: PathBuf::from("store.db"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            max_connections: 5,
        }
    }
}

impl WebConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = WebConfig::default();

        let db_path = lookup("STORE_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let bind_addr = match lookup("STORE_BIND_ADDR") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STORE_BIND_ADDR".to_string()))?,
            None => defaults.bind_addr,
        };

        let max_connections = match lookup("STORE_DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "STORE_DB_MAX_CONNECTIONS".to_string(),
                    ))
                }
            },
            None => defaults.max_connections,
        };

        Ok(WebConfig {
            db_path,
            bind_addr,
            max_connections,
        })
    }

    /// Pool settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.db_path).max_connections(self.max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = WebConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, WebConfig::default());
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn test_overrides() {
        let config = WebConfig::from_lookup(lookup(&[
            ("STORE_DB_PATH", "/var/lib/store/shop.db"),
            ("STORE_BIND_ADDR", "0.0.0.0:8080"),
            ("STORE_DB_MAX_CONNECTIONS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/var/lib/store/shop.db"));
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.db_config().max_connections, 2);
    }

    #[test]
    fn test_invalid_values() {
        let err = WebConfig::from_lookup(lookup(&[("STORE_BIND_ADDR", "localhost")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STORE_BIND_ADDR");

        assert!(WebConfig::from_lookup(lookup(&[("STORE_DB_MAX_CONNECTIONS", "0")])).is_err());
        assert!(WebConfig::from_lookup(lookup(&[("STORE_DB_MAX_CONNECTIONS", "many")])).is_err());
    }
}
