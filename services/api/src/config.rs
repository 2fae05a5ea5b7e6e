//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    /// Root directory of the file storage adapter.
    pub data_dir: PathBuf,
    pub log_level: Level,
    /// The browser origin allowed to call the API.
    pub cors_origin: String,
    /// Sessions untouched for this long are dropped from memory.
    pub session_idle_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address_str =
            lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let data_dir = lookup("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data"));
        if data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "DATA_DIR".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let cors_origin =
            lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:5173".to_string());

        let idle_secs_str = lookup("SESSION_IDLE_SECS").unwrap_or_else(|| "1800".to_string());
        let idle_secs = idle_secs_str.parse::<u64>().map_err(|e| {
            ConfigError::InvalidValue("SESSION_IDLE_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            bind_address,
            data_dir,
            log_level,
            cors_origin,
            session_idle_timeout: Duration::from_secs(idle_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_address.port(), 3000);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.cors_origin, "http://localhost:5173");
        assert_eq!(config.session_idle_timeout, Duration::from_secs(1800));
    }

    #[test]
    fn explicit_values_are_used() {
        let config = Config::from_lookup(lookup_from(&[
            ("BIND_ADDRESS", "127.0.0.1:8080"),
            ("DATA_DIR", "/var/lib/curalink"),
            ("RUST_LOG", "debug"),
            ("SESSION_IDLE_SECS", "60"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8080");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/curalink"));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.session_idle_timeout, Duration::from_secs(60));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[("BIND_ADDRESS", "nowhere")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var, _) if var == "BIND_ADDRESS"));

        let err = Config::from_lookup(lookup_from(&[("RUST_LOG", "loud")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var, _) if var == "RUST_LOG"));

        let err = Config::from_lookup(lookup_from(&[("SESSION_IDLE_SECS", "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var, _) if var == "SESSION_IDLE_SECS"));

        let err = Config::from_lookup(lookup_from(&[("DATA_DIR", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var, _) if var == "DATA_DIR"));
    }
}
