//! JSON file document store
//!
//! Each document lives in `<dir>/<key>.json`. Writes go to a temporary file
//! first and are renamed into place, so a reader never sees half a document.
//! Every write gets its own temporary file, so concurrent writers to one key
//! never interleave bytes; the last rename wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, instrument};
use uuid::Uuid;

use core_kernel::{DocumentStore, HealthCheckResult, HealthCheckable, PortError};

use crate::error::StoreError;

/// Document store persisting each key as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    dir: PathBuf,
}

impl FileDocumentStore {
    /// Opens a store rooted at `dir`, creating the directory if needed
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::io(dir.display().to_string(), e))?;
        debug!(dir = %dir.display(), "Opened file document store");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    async fn get(&self, key: &str) -> Result<Option<Value>, PortError> {
        let path = self.path_for(key)?;
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(path.display().to_string(), e).into()),
        };
        let value = serde_json::from_slice(&bytes).map_err(|e| StoreError::serialization(key, e))?;
        Ok(Some(value))
    }

    #[instrument(skip(self, value), fields(dir = %self.dir.display()))]
    async fn set(&self, key: &str, value: Value) -> Result<(), PortError> {
        let path = self.path_for(key)?;
        let bytes = serde_json::to_vec_pretty(&value).map_err(|e| StoreError::serialization(key, e))?;

        let tmp = self.dir.join(format!(".{key}.{}.tmp", Uuid::new_v4().simple()));
        fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StoreError::io(tmp.display().to_string(), e))?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(StoreError::io(path.display().to_string(), e).into());
        }
        debug!(bytes = bytes.len(), "Document written");
        Ok(())
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    async fn remove(&self, key: &str) -> Result<(), PortError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(path.display().to_string(), e).into()),
        }
    }
}

#[async_trait]
impl HealthCheckable for FileDocumentStore {
    /// Checks that the storage directory is still there
    async fn health_check(&self) -> HealthCheckResult {
        match fs::metadata(&self.dir).await {
            Ok(meta) if meta.is_dir() => HealthCheckResult::healthy("file-document-store"),
            Ok(_) => HealthCheckResult::unhealthy(
                "file-document-store",
                format!("{} is not a directory", self.dir.display()),
            ),
            Err(e) => HealthCheckResult::unhealthy(
                "file-document-store",
                format!("Storage error: {e}"),
            ),
        }
    }
}
