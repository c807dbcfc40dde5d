use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub title: String,
    pub content: String,
    pub notification_type: NotificationType,
    pub related_project_id: Option<Uuid>,
    pub related_task_id: Option<Uuid>,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<FixedOffset>,
}
