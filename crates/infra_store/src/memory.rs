//! In-memory document store

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::instrument;

use core_kernel::{DocumentStore, HealthCheckResult, HealthCheckable, PortError};

/// Document store backed by a map; contents are lost on drop
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<String, Value>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<Value>, PortError> {
        Ok(self.documents.read().await.get(key).cloned())
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: Value) -> Result<(), PortError> {
        self.documents.write().await.insert(key.to_string(), value);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: &str) -> Result<(), PortError> {
        self.documents.write().await.remove(key);
        Ok(())
    }
}

#[async_trait]
impl HealthCheckable for InMemoryDocumentStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("memory-document-store")
    }
}
