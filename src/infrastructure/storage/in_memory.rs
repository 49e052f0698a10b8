use crate::core::errors::RemoError;
use crate::infrastructure::storage::{KeyValueStore, StorageEvent};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};
use tracing::trace;

const EVENT_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    events: broadcast::Sender<StorageEvent>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        InMemoryStore {
            entries: Arc::new(RwLock::new(HashMap::new())),
            events,
        }
    }

    fn publish(&self, event: StorageEvent) {
        // Nobody listening is fine.
        if self.events.send(event).is_err() {
            trace!("No storage subscribers");
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RemoError> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), RemoError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.clone());
        drop(entries);
        self.publish(StorageEvent {
            key: key.to_string(),
            new_value: Some(value),
        });
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RemoError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
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
