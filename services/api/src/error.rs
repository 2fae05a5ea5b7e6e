//! services/api/src/error.rs
//!
//! Startup failures of the `api` binary. Request-level failures never reach
//! this type; handlers map them to status codes directly.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Preparing the data directory, binding the listener or serving failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured value was accepted by the loader but rejected by the server.
    #[error("Startup failed: {0}")]
    Internal(String),
}
