//! The local document store: a key-value collection of JSON documents.
//!
//! The engine never touches this directly; repositories borrow a store and
//! the application decides which implementation to wire in. `MemoryStore`
//! is the only implementation here: an in-memory map with an optional JSON
//! snapshot file, which is all a single-user local tracker needs.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::Result;

/// Async key-value document storage, keyed by (collection, key).
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>>;
    async fn put(&self, collection: &str, key: &str, document: Value) -> Result<()>;
    /// Returns whether a document was actually removed.
    async fn delete(&self, collection: &str, key: &str) -> Result<bool>;
    /// All documents in a collection, in key order.
    async fn list(&self, collection: &str) -> Result<Vec<Value>>;
}

type Collections = HashMap<String, BTreeMap<String, Value>>;

/// In-memory document store with an optional JSON snapshot on disk.
pub struct MemoryStore {
    collections: RwLock<Collections>,
    snapshot_path: Option<PathBuf>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            snapshot_path: None,
        }
    }

    /// Opens a store backed by a snapshot file, loading it if it exists.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let collections = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No snapshot yet, starting empty");
                HashMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            collections: RwLock::new(collections),
            snapshot_path: Some(path),
        })
    }

    /// Writes the snapshot file, if this store has one. A plain in-memory
    /// store flushes to nowhere and that is fine.
    pub async fn flush(&self) -> Result<()> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };

        let collections = self.collections.read().await;
        let bytes = serde_json::to_vec_pretty(&*collections)?;
        tokio::fs::write(path, bytes).await?;
        tracing::debug!(path = %path.display(), "Snapshot written");
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|c| c.get(key))
            .cloned())
    }

    async fn put(&self, collection: &str, key: &str, document: Value) -> Result<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), document);
        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<bool> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(collection)
            .is_some_and(|c| c.remove(key).is_some()))
    }

    async fn list(&self, collection: &str) -> Result<Vec<Value>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|c| c.values().cloned().collect())
            .unwrap_or_default())
    }
}
