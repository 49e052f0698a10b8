use crate::core::errors::RemoError;
use crate::infrastructure::storage::{KeyValueStore, StorageEvent};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};
use tracing::{debug, info, trace};

const EVENT_CAPACITY: usize = 64;

/// Keeps every key in one JSON object on disk and rewrites the file after each change.
#[derive(Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: Arc<RwLock<BTreeMap<String, String>>>,
    events: broadcast::Sender<StorageEvent>,
}

impl FileStore {
    /// Opens `path`, starting empty when the file does not exist yet.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, RemoError> {
        let path = path.as_ref().to_path_buf();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                RemoError::CorruptedState(path.display().to_string(), e.to_string())
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(RemoError::StorageError(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };
        info!(path = %path.display(), keys = entries.len(), "Opened file store");

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Ok(FileStore {
            path,
            entries: Arc::new(RwLock::new(entries)),
            events,
        })
    }

    async fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), RemoError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                RemoError::StorageError(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| RemoError::StorageError(format!("Failed to serialize store: {}", e)))?;
        tokio::fs::write(&self.path, content).await.map_err(|e| {
            RemoError::StorageError(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), "Flushed file store");
        Ok(())
    }

    fn publish(&self, event: StorageEvent) {
        if self.events.send(event).is_err() {
            trace!("No storage subscribers");
        }
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RemoError> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), RemoError> {
        let mut entries = self.entries.write().await;
        let mut next = entries.clone();
        next.insert(key.to_string(), value.clone());
        // Memory only changes once the file has the new contents.
        self.flush(&next).await?;
        *entries = next;
        drop(entries);
        self.publish(StorageEvent {
            key: key.to_string(),
            new_value: Some(value),
        });
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RemoError> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(key) {
            let mut next = entries.clone();
            next.remove(key);
            self.flush(&next).await?;
            *entries = next;
        }
        drop(entries);
        self.publish(StorageEvent {
            key: key.to_string(),
            new_value: None,
        });
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.events.subscribe()
    }
}
