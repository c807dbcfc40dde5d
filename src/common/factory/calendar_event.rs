use chrono::{DateTime, FixedOffset, Utc};
use entities::calendar_event;
use uuid::Uuid;

pub fn calendar_event(user_id: Uuid, event_type: &str) -> calendar_event::Model {
    calendar_event::Model {
        id: Uuid::now_v7(),
        title: "event".to_string(),
        description: String::new(),
        event_type: event_type.to_string(),
        priority: calendar_event::PRIORITY_MEDIUM.to_string(),
        start_date: Utc::now().into(),
        end_date: None,
        is_all_day: false,
        user_id,
        is_completed: false,
        is_visible: true,
    }
}

pub trait CalendarEventFactory {
    fn start_date(self, start_date: DateTime<FixedOffset>) -> calendar_event::Model;
    fn is_visible(self, is_visible: bool) -> calendar_event::Model;
}

impl CalendarEventFactory for calendar_event::Model {
    fn start_date(mut self, start_date: DateTime<FixedOffset>) -> calendar_event::Model {
        self.start_date = start_date;
        self
    }

    fn is_visible(mut self, is_visible: bool) -> calendar_event::Model {
        self.is_visible = is_visible;
        self
    }
}
