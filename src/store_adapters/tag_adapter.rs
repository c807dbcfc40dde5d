use std::collections::HashSet;

use entities::{tag::Model, user};
use tracing::{event, Level};
use uuid::Uuid;

use crate::{Select, Store, StoreErr};

/// Lookups over the shared tag table. `filter_eq_user` narrows to the tags a
/// user is a member of; a membership pointing at a missing tag is skipped.
#[derive(Clone)]
pub struct TagAdapter<'a> {
    pub store: &'a Store,
    pub query: Select<Model>,
    member_of: Option<Vec<Uuid>>,
}

impl<'a> TagAdapter<'a> {
    pub fn init(store: &'a Store) -> Self {
        Self {
            store,
            query: Select::new(),
            member_of: None,
        }
    }
}

pub trait TagFilter {
    fn filter_eq_user(self, user: &user::Model) -> Self;
    fn filter_eq_name(self, name: &str) -> Self;
    fn filter_in_names(self, names: &[&str]) -> Self;
}

impl TagFilter for TagAdapter<'_> {
    fn filter_eq_user(mut self, user: &user::Model) -> Self {
        self.member_of = Some(user.tag_ids.clone());
        self
    }

    fn filter_eq_name(mut self, name: &str) -> Self {
        let name = name.to_string();
        self.query = self.query.filter(move |tag| tag.name == name);
        self
    }

    fn filter_in_names(mut self, names: &[&str]) -> Self {
        let names: HashSet<String> = names.iter().map(|name| name.to_string()).collect();
        self.query = self.query.filter(move |tag| names.contains(&tag.name));
        self
    }
}

pub trait TagQuery {
    fn get_all(self) -> Result<Vec<Model>, StoreErr>;
    fn exists(self) -> Result<bool, StoreErr>;
}

impl TagQuery for TagAdapter<'_> {
    fn get_all(self) -> Result<Vec<Model>, StoreErr> {
        let snapshot = self.store.read()?;
        match &self.member_of {
            None => Ok(snapshot
                .tags
                .iter()
                .filter(|tag| self.query.matches(tag))
                .cloned()
                .collect()),
            Some(tag_ids) => Ok(tag_ids
                .iter()
                .filter_map(|tag_id| {
                    let tag = snapshot.tags.iter().find(|tag| &tag.id == tag_id);
                    if tag.is_none() {
                        event!(Level::WARN, %tag_id, "Membership refers to a missing tag.");
                    }
                    tag
                })
                .filter(|tag| self.query.matches(tag))
                .cloned()
                .collect()),
        }
    }

    fn exists(self) -> Result<bool, StoreErr> {
        self.get_all().map(|tags| !tags.is_empty())
    }
}
