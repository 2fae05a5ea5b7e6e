//! services/api/src/web/state.rs
//!
//! Defines the application's shared state and the per-session dashboard state.

use crate::config::Config;
use curalink_core::ports::{StorageKey, StorageService};
use curalink_core::{PatientDashboard, ResearcherDashboard};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{info, warn};
use uuid::Uuid;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// Exclusive access to one session for the lifetime of a request.
pub type SessionGuard = OwnedMutexGuard<SessionState>;

struct SessionSlot {
    state: Arc<Mutex<SessionState>>,
    last_seen: Instant,
}

/// The shared application state, created once at startup and passed to all handlers.
pub struct AppState {
    pub storage: Arc<dyn StorageService>,
    pub config: Arc<Config>,
    sessions: Mutex<HashMap<Uuid, SessionSlot>>,
}

impl AppState {
    pub fn new(storage: Arc<dyn StorageService>, config: Arc<Config>) -> Self {
        Self {
            storage,
            config,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the id of a live session, restoring it from storage when
    /// `requested` names one that is not in memory yet. Without a requested id
    /// a fresh session is started. Idle sessions are dropped first.
    pub async fn open_session(&self, requested: Option<Uuid>) -> Uuid {
        let session_id = requested.unwrap_or_else(Uuid::new_v4);
        {
            let mut sessions = self.sessions.lock().await;
            self.evict_idle(&mut sessions);
            if let Some(slot) = sessions.get_mut(&session_id) {
                slot.last_seen = Instant::now();
                return session_id;
            }
        }

        let restored = SessionState::load(self.storage.as_ref(), session_id).await;
        self.sessions
            .lock()
            .await
            .entry(session_id)
            .or_insert_with(|| SessionSlot {
                state: Arc::new(Mutex::new(restored)),
                last_seen: Instant::now(),
            });
        info!(%session_id, resumed = requested.is_some(), "session opened");
        session_id
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, SessionSlot>) {
        let timeout = self.config.session_idle_timeout;
        let before = sessions.len();
        sessions.retain(|_, slot| slot.last_seen.elapsed() < timeout);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, "idle sessions dropped");
        }
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Locks one session. Returns `None` if the session is unknown.
    ///
    /// Requests on the same session are serialised by the guard; hold it
    /// across `persist` so that session's writes reach storage in order.
    pub async fn session(&self, session_id: Uuid) -> Option<SessionGuard> {
        let state = {
            let mut sessions = self.sessions.lock().await;
            let slot = sessions.get_mut(&session_id)?;
            slot.last_seen = Instant::now();
            slot.state.clone()
        };
        Some(state.lock_owned().await)
    }

    /// Runs `f` against one session. Returns `None` if the session is unknown.
    pub async fn with_session<R>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut SessionState) -> R,
    ) -> Option<R> {
        let mut session = self.session(session_id).await?;
        Some(f(&mut session))
    }

    /// Writes a document through the storage port. Failures are logged and
    /// swallowed; the in-memory state stays authoritative for the session.
    pub async fn persist(&self, session_id: Uuid, key: StorageKey, document: Option<String>) {
        let Some(document) = document else {
            return;
        };
        if let Err(e) = self.storage.save(session_id, key, &document).await {
            warn!(%session_id, %key, error = %e, "failed to persist document");
        }
    }
}

//=========================================================================================
// SessionState (Specific to One Browser Session)
//=========================================================================================

/// Everything one browser session sees on both dashboards.
#[derive(Default)]
pub struct SessionState {
    pub patient: PatientDashboard,
    pub researcher: ResearcherDashboard,
}

impl SessionState {
    /// Rebuilds a session from storage. Anything absent or unreadable falls back
    /// to its default.
    pub async fn load(storage: &dyn StorageService, session_id: Uuid) -> Self {
        let patient = load_document(storage, session_id, StorageKey::PatientData).await;
        let favorites = load_document(storage, session_id, StorageKey::Favorites).await;
        let researcher = load_document(storage, session_id, StorageKey::ResearcherData).await;
        let researcher_favorites =
            load_document(storage, session_id, StorageKey::ResearcherFavorites).await;

        Self {
            patient: PatientDashboard::restore(patient, favorites.unwrap_or_default()),
            researcher: ResearcherDashboard::restore(
                researcher,
                researcher_favorites.unwrap_or_default(),
            ),
        }
    }
}

async fn load_document<T: DeserializeOwned>(
    storage: &dyn StorageService,
    session_id: Uuid,
    key: StorageKey,
) -> Option<T> {
    let raw = match storage.load(session_id, key).await {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(%session_id, %key, error = %e, "failed to load document, using defaults");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(%session_id, %key, error = %e, "stored document is malformed, using defaults");
            None
        }
    }
}

/// Serialises a value for `AppState::persist`, logging instead of failing.
pub fn encode<T: Serialize + ?Sized>(key: StorageKey, value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(document) => Some(document),
        Err(e) => {
            warn!(%key, error = %e, "failed to encode document");
            None
        }
    }
}
