//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3001;

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error), overridden by `RUST_LOG`.
    pub log_level: String,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// Directory of static files served ahead of the unknown-endpoint fallback.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            cors_allowed_origins: "*".to_string(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PORT`: Server port (default: 3001)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    /// - `STATIC_DIR`: Directory of static assets (default: none)
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("log_level", "info")?
            .set_default("cors_allowed_origins", "*")?
            .add_source(Environment::default().try_parsing(true))
            .build()?;

        config.try_deserialize()
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        unsafe {
            env::remove_var("PORT");
            env::remove_var("LOG_LEVEL");
            env::remove_var("CORS_ALLOWED_ORIGINS");
            env::remove_var("STATIC_DIR");
        }
    }

    #[test]
    #[serial]
    fn test_default_values() {
        clear_env();

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cors_allowed_origins, "*");
        assert!(config.static_dir.is_none());
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        clear_env();
        unsafe {
            env::set_var("PORT", "4000");
            env::set_var("LOG_LEVEL", "debug");
            env::set_var("STATIC_DIR", "dist");
        }

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.port, 4000);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
        assert_eq!(config.socket_addr().port(), 4000);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        unsafe {
            env::set_var("PORT", "not-a-port");
        }

        assert!(ServerConfig::from_env().is_err());

        clear_env();
    }
}
