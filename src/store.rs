use async_trait::async_trait;
use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Key-value backend holding whole JSON documents.
///
/// `put` replaces the entire document for a key in one step, so readers
/// see either the old document or the new one, never a mix. There is no
/// compare-and-swap: callers doing read-modify-write (the vote and entry
/// stores) can lose an update under concurrent writes to the same key.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn put(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// In-process store, one instance per process created at startup.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.documents.get(key).map(|doc| doc.value().clone()))
    }

    async fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.documents.insert(key.to_string(), value);
        Ok(())
    }
}
