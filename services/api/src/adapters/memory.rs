//! services/api/src/adapters/memory.rs
//!
//! An in-process `StorageService` for tests and throwaway runs. Nothing
//! survives a restart.

use async_trait::async_trait;
use curalink_core::ports::{PortResult, StorageKey, StorageService};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryStorageAdapter {
    documents: RwLock<HashMap<(Uuid, StorageKey), String>>,
}

impl MemoryStorageAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl StorageService for MemoryStorageAdapter {
    async fn load(&self, session_id: Uuid, key: StorageKey) -> PortResult<Option<String>> {
        Ok(self.documents.read().await.get(&(session_id, key)).cloned())
    }

    async fn save(&self, session_id: Uuid, key: StorageKey, value: &str) -> PortResult<()> {
        self.documents
            .write()
            .await
            .insert((session_id, key), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn documents_are_scoped_by_session_and_key() {
        let adapter = MemoryStorageAdapter::new();
        let session_id = Uuid::new_v4();

        adapter.save(session_id, StorageKey::Favorites, "[]").await.unwrap();
        adapter
            .save(session_id, StorageKey::ResearcherFavorites, "[1]")
            .await
            .unwrap();

        assert_eq!(adapter.len().await, 2);
        assert_eq!(
            adapter.load(session_id, StorageKey::Favorites).await.unwrap().as_deref(),
            Some("[]")
        );
        assert!(adapter
            .load(Uuid::new_v4(), StorageKey::Favorites)
            .await
            .unwrap()
            .is_none());
    }
}
