//! services/api/src/adapters/storage.rs
//!
//! This module contains the file-backed storage adapter, the concrete
//! implementation of the `StorageService` port used in production. Every
//! `(session, key)` pair is one JSON file: `<root>/<session_id>/<key>.json`.

use async_trait::async_trait;
use curalink_core::ports::{PortError, PortResult, StorageKey, StorageService};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A storage adapter that keeps each session's documents in its own directory.
#[derive(Clone, Debug)]
pub struct FileStorageAdapter {
    root: PathBuf,
}

impl FileStorageAdapter {
    /// Creates a new `FileStorageAdapter` rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the root directory if it does not exist yet.
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn session_dir(&self, session_id: Uuid) -> PathBuf {
        self.root.join(session_id.to_string())
    }

    fn document_path(&self, session_id: Uuid, key: StorageKey) -> PathBuf {
        self.session_dir(session_id)
            .join(format!("{}.json", key.as_str()))
    }
}

//=========================================================================================
// `StorageService` Trait Implementation
//=========================================================================================

#[async_trait]
impl StorageService for FileStorageAdapter {
    async fn load(&self, session_id: Uuid, key: StorageKey) -> PortResult<Option<String>> {
        let path = self.document_path(session_id, key);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PortError::Unexpected(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn save(&self, session_id: Uuid, key: StorageKey, value: &str) -> PortResult<()> {
        let dir = self.session_dir(session_id);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| PortError::Unexpected(format!("failed to create {}: {}", dir.display(), e)))?;

        // Readers only ever see a complete document. Each write gets its own
        // temp file so concurrent saves never share one.
        let path = self.document_path(session_id, key);
        let tmp = path.with_extension(format!("json.{}.tmp", Uuid::new_v4()));
        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| PortError::Unexpected(format!("failed to write {}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| PortError::Unexpected(format!("failed to replace {}: {}", path.display(), e)))?;

        debug!(%session_id, key = key.as_str(), "document saved");
        Ok(())
    }
}
