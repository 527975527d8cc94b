//! HTTP Server Configuration
//!
//! Bind address and database location. Values are resolved in order:
//! defaults, optional JSON config file, environment, command line.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite database URL (default: "sqlite://stock.db")
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    "sqlite://stock.db".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file. Absent keys take defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Override fields from `HOST`, `PORT` and `DATABASE_URL`.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Override fields from an arbitrary variable lookup
    pub fn apply_vars<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port,
            })?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        Ok(self)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_url, "sqlite://stock.db");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"port": 4000}}"#).unwrap();

        let config = ServerConfig::load(file.path()).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_load_missing_file() {
        let err = ServerConfig::load(Path::new("/nonexistent/stockroom.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]
        .into_iter()
        .collect();

        let config = ServerConfig::default()
            .apply_vars(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.socket_addr(), "127.0.0.1:8081");
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn test_invalid_port_env() {
        let err = ServerConfig::default()
            .apply_vars(|key| (key == "PORT").then(|| "not-a-port".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
