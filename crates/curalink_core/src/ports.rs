//! crates/curalink_core/src/ports.rs
//!
//! Defines the service contracts (traits) the core expects from the outside world.
//! The core never performs I/O itself; persistence is reached only through
//! `StorageService`, which the service crate implements with concrete adapters.

use async_trait::async_trait;
use uuid::Uuid;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Storage Keys
//=========================================================================================

/// The fixed set of documents a session may persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    PatientData,
    ResearcherData,
    Favorites,
    ResearcherFavorites,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::PatientData => "patientData",
            StorageKey::ResearcherData => "researcherData",
            StorageKey::Favorites => "favorites",
            StorageKey::ResearcherFavorites => "researcherFavorites",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait StorageService: Send + Sync {
    /// Reads the raw document stored under `key` for a session.
    /// Returns `Ok(None)` when nothing has been saved yet.
    async fn load(&self, session_id: Uuid, key: StorageKey) -> PortResult<Option<String>>;

    /// Replaces the document stored under `key` for a session.
    async fn save(&self, session_id: Uuid, key: StorageKey, value: &str) -> PortResult<()>;
}
