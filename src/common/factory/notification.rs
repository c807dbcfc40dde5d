use chrono::{DateTime, FixedOffset, Utc};
use entities::notification::{self, NotificationType};
use uuid::Uuid;

pub fn notification(recipient_id: Uuid) -> notification::Model {
    notification::Model {
        id: Uuid::now_v7(),
        recipient_id,
        title: "notification".to_string(),
        content: String::new(),
        notification_type: NotificationType::Info,
        related_project_id: None,
        related_task_id: None,
        is_read: false,
        created_at: Utc::now().into(),
    }
}

pub trait NotificationFactory {
    fn title(self, title: &str) -> notification::Model;
    fn related_project_id(self, related_project_id: Option<Uuid>) -> notification::Model;
    fn related_task_id(self, related_task_id: Option<Uuid>) -> notification::Model;
    fn created_at(self, created_at: DateTime<FixedOffset>) -> notification::Model;
}

impl NotificationFactory for notification::Model {
    fn title(mut self, title: &str) -> notification::Model {
        self.title = title.to_string();
        self
    }

    fn related_project_id(mut self, related_project_id: Option<Uuid>) -> notification::Model {
        self.related_project_id = related_project_id;
        self
    }

    fn related_task_id(mut self, related_task_id: Option<Uuid>) -> notification::Model {
        self.related_task_id = related_task_id;
        self
    }

    fn created_at(mut self, created_at: DateTime<FixedOffset>) -> notification::Model {
        self.created_at = created_at;
        self
    }
}
