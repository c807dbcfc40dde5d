use std::collections::HashSet;

use chrono::NaiveDate;
use uuid::Uuid;

use entities::project::Model;

use crate::{Select, Store, StoreErr};

#[derive(Clone)]
pub struct ProjectAdapter<'a> {
    pub store: &'a Store,
    pub query: Select<Model>,
}

impl<'a> ProjectAdapter<'a> {
    pub fn init(store: &'a Store) -> Self {
        Self {
            store,
            query: Select::new(),
        }
    }
}

pub trait ProjectFilter {
    fn filter_end_date_between(self, from: NaiveDate, to: NaiveDate) -> Self;
    fn filter_in_statuses(self, statuses: &[&str]) -> Self;
}

impl ProjectFilter for ProjectAdapter<'_> {
    /// Inclusive on both ends. Projects without an end date never match.
    fn filter_end_date_between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.query = self.query.filter(move |project| {
            project
                .end_date
                .is_some_and(|end_date| from <= end_date && end_date <= to)
        });
        self
    }

    fn filter_in_statuses(mut self, statuses: &[&str]) -> Self {
        let statuses: HashSet<String> = statuses.iter().map(|s| s.to_string()).collect();
        self.query = self
            .query
            .filter(move |project| statuses.contains(&project.status));
        self
    }
}

pub trait ProjectQuery {
    fn get_all(self) -> Result<Vec<Model>, StoreErr>;
    fn get_by_id(self, id: Uuid) -> Result<Option<Model>, StoreErr>;
}

impl ProjectQuery for ProjectAdapter<'_> {
    fn get_all(self) -> Result<Vec<Model>, StoreErr> {
        Ok(self
            .store
            .read()?
            .projects
            .iter()
            .filter(|project| self.query.matches(project))
            .cloned()
            .collect())
    }

    fn get_by_id(self, id: Uuid) -> Result<Option<Model>, StoreErr> {
        Ok(self
            .store
            .read()?
            .projects
            .iter()
            .find(|project| project.id == id && self.query.matches(project))
            .cloned())
    }
}
