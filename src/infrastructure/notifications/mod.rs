pub mod in_memory;

use crate::core::errors::RemoError;
use crate::core::models::notification::Notification;
use async_trait::async_trait;

/// Sink for user-facing messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification) -> Result<(), RemoError>;
    /// Returns pending notifications and forgets them.
    async fn drain(&self) -> Result<Vec<Notification>, RemoError>;
}
