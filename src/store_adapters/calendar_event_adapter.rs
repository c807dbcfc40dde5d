use uuid::Uuid;

use entities::calendar_event::Model;

use crate::{Select, Store, StoreErr};

#[derive(Clone)]
pub struct CalendarEventAdapter<'a> {
    pub store: &'a Store,
    pub query: Select<Model>,
}

impl<'a> CalendarEventAdapter<'a> {
    pub fn init(store: &'a Store) -> Self {
        Self {
            store,
            query: Select::new(),
        }
    }
}

pub trait CalendarEventFilter {
    fn filter_eq_user_id(self, user_id: Uuid) -> Self;
    fn filter_eq_is_visible(self, is_visible: bool) -> Self;
}

impl CalendarEventFilter for CalendarEventAdapter<'_> {
    fn filter_eq_user_id(mut self, user_id: Uuid) -> Self {
        self.query = self.query.filter(move |event| event.user_id == user_id);
        self
    }

    fn filter_eq_is_visible(mut self, is_visible: bool) -> Self {
        self.query = self
            .query
            .filter(move |event| event.is_visible == is_visible);
        self
    }
}

pub trait CalendarEventQuery {
    fn get_all(self) -> Result<Vec<Model>, StoreErr>;
}

impl CalendarEventQuery for CalendarEventAdapter<'_> {
    /// Ordered by `start_date`.
    fn get_all(self) -> Result<Vec<Model>, StoreErr> {
        let mut events: Vec<Model> = self
            .store
            .read()?
            .calendar_events
            .iter()
            .filter(|event| self.query.matches(event))
            .cloned()
            .collect();
        events.sort_by_key(|event| event.start_date);
        Ok(events)
    }
}
