use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A user-facing toast message.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn info(title: &str, description: impl Into<String>) -> Self {
        Notification {
            title: title.to_string(),
            description: description.into(),
            variant: NotificationVariant::Default,
            timestamp: Utc::now(),
        }
    }

    pub fn failure(title: &str, description: impl Into<String>) -> Self {
        Notification {
            variant: NotificationVariant::Destructive,
            ..Notification::info(title, description)
        }
    }
}
