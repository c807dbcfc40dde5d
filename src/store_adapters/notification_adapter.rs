use chrono::{DateTime, FixedOffset, NaiveDate};
use uuid::Uuid;

use entities::notification::{Model, NotificationType};

use crate::{Select, Store, StoreErr};

#[derive(Clone)]
pub struct NotificationAdapter<'a> {
    pub store: &'a Store,
    pub query: Select<Model>,
}

impl<'a> NotificationAdapter<'a> {
    pub fn init(store: &'a Store) -> Self {
        Self {
            store,
            query: Select::new(),
        }
    }
}

pub trait NotificationFilter {
    fn filter_eq_recipient_id(self, recipient_id: Uuid) -> Self;
    fn filter_eq_related_project_id(self, project_id: Uuid) -> Self;
    fn filter_eq_related_task_id(self, task_id: Uuid) -> Self;
    fn filter_eq_title(self, title: &str) -> Self;
    fn filter_created_on(self, date: NaiveDate, offset: FixedOffset) -> Self;
}

impl NotificationFilter for NotificationAdapter<'_> {
    fn filter_eq_recipient_id(mut self, recipient_id: Uuid) -> Self {
        self.query = self
            .query
            .filter(move |notification| notification.recipient_id == recipient_id);
        self
    }

    fn filter_eq_related_project_id(mut self, project_id: Uuid) -> Self {
        self.query = self
            .query
            .filter(move |notification| notification.related_project_id == Some(project_id));
        self
    }

    fn filter_eq_related_task_id(mut self, task_id: Uuid) -> Self {
        self.query = self
            .query
            .filter(move |notification| notification.related_task_id == Some(task_id));
        self
    }

    fn filter_eq_title(mut self, title: &str) -> Self {
        let title = title.to_string();
        self.query = self
            .query
            .filter(move |notification| notification.title == title);
        self
    }

    /// Matches on the calendar date of `created_at` as seen from `offset`.
    fn filter_created_on(mut self, date: NaiveDate, offset: FixedOffset) -> Self {
        self.query = self.query.filter(move |notification| {
            notification.created_at.with_timezone(&offset).date_naive() == date
        });
        self
    }
}

pub trait NotificationQuery {
    fn get_all(self) -> Result<Vec<Model>, StoreErr>;
    fn exists(self) -> Result<bool, StoreErr>;
}

impl NotificationQuery for NotificationAdapter<'_> {
    fn get_all(self) -> Result<Vec<Model>, StoreErr> {
        Ok(self
            .store
            .read()?
            .notifications
            .iter()
            .filter(|notification| self.query.matches(notification))
            .cloned()
            .collect())
    }

    fn exists(self) -> Result<bool, StoreErr> {
        Ok(self
            .store
            .read()?
            .notifications
            .iter()
            .any(|notification| self.query.matches(notification)))
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub recipient_id: Uuid,
    pub title: String,
    pub content: String,
    pub notification_type: NotificationType,
    pub related_project_id: Option<Uuid>,
    pub related_task_id: Option<Uuid>,
    pub created_at: DateTime<FixedOffset>,
}

pub trait NotificationMutation {
    fn create(self, params: CreateNotificationParams) -> Result<Model, StoreErr>;
}

impl NotificationMutation for NotificationAdapter<'_> {
    fn create(self, params: CreateNotificationParams) -> Result<Model, StoreErr> {
        let notification = Model {
            id: Uuid::now_v7(),
            recipient_id: params.recipient_id,
            title: params.title,
            content: params.content,
            notification_type: params.notification_type,
            related_project_id: params.related_project_id,
            related_task_id: params.related_task_id,
            is_read: false,
            created_at: params.created_at,
        };
        self.store.insert_notification(notification.clone())?;
        Ok(notification)
    }
}
