use std::collections::HashSet;

use chrono::NaiveDate;

use entities::task::Model;

use crate::{Select, Store, StoreErr};

#[derive(Clone)]
pub struct TaskAdapter<'a> {
    pub store: &'a Store,
    pub query: Select<Model>,
}

impl<'a> TaskAdapter<'a> {
    pub fn init(store: &'a Store) -> Self {
        Self {
            store,
            query: Select::new(),
        }
    }
}

pub trait TaskFilter {
    fn filter_due_date_between(self, from: NaiveDate, to: NaiveDate) -> Self;
    fn filter_in_statuses(self, statuses: &[&str]) -> Self;
}

impl TaskFilter for TaskAdapter<'_> {
    /// Inclusive on both ends. Tasks without a due date never match.
    fn filter_due_date_between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.query = self.query.filter(move |task| {
            task.due_date
                .is_some_and(|due_date| from <= due_date && due_date <= to)
        });
        self
    }

    fn filter_in_statuses(mut self, statuses: &[&str]) -> Self {
        let statuses: HashSet<String> = statuses.iter().map(|s| s.to_string()).collect();
        self.query = self.query.filter(move |task| statuses.contains(&task.status));
        self
    }
}

pub trait TaskQuery {
    fn get_all(self) -> Result<Vec<Model>, StoreErr>;
}

impl TaskQuery for TaskAdapter<'_> {
    fn get_all(self) -> Result<Vec<Model>, StoreErr> {
        Ok(self
            .store
            .read()?
            .tasks
            .iter()
            .filter(|task| self.query.matches(task))
            .cloned()
            .collect())
    }
}
