pub mod file;
pub mod in_memory;
pub mod storage_keys;

use crate::core::errors::RemoError;
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Published after every successful write or removal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageEvent {
    pub key: String,
    /// `None` when the key was removed.
    pub new_value: Option<String>,
}

/// String-keyed store holding serialized JSON values. Writes replace the whole value.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RemoError>;
    async fn set(&self, key: &str, value: String) -> Result<(), RemoError>;
    async fn remove(&self, key: &str) -> Result<(), RemoError>;
    fn subscribe(&self) -> broadcast::Receiver<StorageEvent>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>, RemoError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), RemoError> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), RemoError> {
        (**self).remove(key).await
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        (**self).subscribe()
    }
}

/// Store shared by the HTTP layer, whichever backend was configured.
pub type SharedStore = Arc<dyn KeyValueStore>;

pub async fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, RemoError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| RemoError::CorruptedState(key.to_string(), e.to_string())),
        None => Ok(None),
    }
}

/// Like [`load_json`] for list-valued keys, treating a missing key as empty.
pub async fn load_list<T, S>(store: &S, key: &str) -> Result<Vec<T>, RemoError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    Ok(load_json(store, key).await?.unwrap_or_default())
}

pub async fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), RemoError>
where
    T: Serialize + ?Sized + Sync,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)
        .map_err(|e| RemoError::StorageError(format!("Failed to serialize `{}`: {}", key, e)))?;
    store.set(key, raw).await
}
