use crate::constants::MAX_PENDING_NOTIFICATIONS;
use crate::core::errors::RemoError;
use crate::core::models::notification::{Notification, NotificationVariant};
use crate::infrastructure::notifications::Notifier;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Keeps at most `capacity` undelivered notifications, dropping the oldest first.
#[derive(Clone)]
pub struct InMemoryNotifier {
    notifications: Arc<RwLock<VecDeque<Notification>>>,
    capacity: usize,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::with_capacity(MAX_PENDING_NOTIFICATIONS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        InMemoryNotifier {
            notifications: Arc::new(RwLock::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }
}

impl Default for InMemoryNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), RemoError> {
        match notification.variant {
            NotificationVariant::Default => {
                info!(title = %notification.title, "{}", notification.description)
            }
            NotificationVariant::Destructive => {
                warn!(title = %notification.title, "{}", notification.description)
            }
        }
        let mut notifications = self.notifications.write().await;
        while notifications.len() >= self.capacity {
            if let Some(dropped) = notifications.pop_front() {
                debug!(title = %dropped.title, "Dropping undelivered notification");
            }
        }
        notifications.push_back(notification);
        Ok(())
    }

    async fn drain(&self) -> Result<Vec<Notification>, RemoError> {
        let mut notifications = self.notifications.write().await;
        Ok(notifications.drain(..).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn oldest_notifications_are_dropped_past_capacity() {
        let notifier = InMemoryNotifier::with_capacity(3);
        for i in 0..5 {
            notifier
                .notify(Notification::info(&format!("n{}", i), "body"))
                .await
                .unwrap();
        }

        let titles: Vec<String> = notifier
            .drain()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["n2", "n3", "n4"]);
        assert!(notifier.drain().await.unwrap().is_empty());
    }
}
