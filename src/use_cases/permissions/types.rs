use std::{fmt, sync::Arc};

use entities::user;
use store_adapters::{
    tag_adapter::{TagAdapter, TagFilter, TagQuery},
    Store, StoreErr,
};

#[derive(Debug, PartialEq)]
pub enum TagLookupError {
    Store(String),
}

impl fmt::Display for TagLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagLookupError::Store(e) => write!(f, "Store: {}", e),
        }
    }
}

impl From<StoreErr> for TagLookupError {
    fn from(value: StoreErr) -> Self {
        TagLookupError::Store(value.to_string())
    }
}

/// A user's tag collection. Names are matched exactly, case included.
pub trait TagHolder {
    fn has_tag_named(&self, name: &str) -> Result<bool, TagLookupError>;

    fn has_any_tag_named(&self, names: &[&str]) -> Result<bool, TagLookupError> {
        for name in names {
            if self.has_tag_named(name)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl TagHolder for [String] {
    fn has_tag_named(&self, name: &str) -> Result<bool, TagLookupError> {
        Ok(self.iter().any(|tag| tag == name))
    }
}

impl TagHolder for Vec<String> {
    fn has_tag_named(&self, name: &str) -> Result<bool, TagLookupError> {
        self.as_slice().has_tag_named(name)
    }
}

/// Anything the visibility rules can be asked about.
pub trait PolicySubject {
    fn role(&self) -> &str;

    /// `None` when this kind of subject carries no tag collection at all.
    fn tags(&self) -> Option<&dyn TagHolder>;
}

impl<T: PolicySubject + ?Sized> PolicySubject for &T {
    fn role(&self) -> &str {
        (**self).role()
    }

    fn tags(&self) -> Option<&dyn TagHolder> {
        (**self).tags()
    }
}

impl<T: PolicySubject + ?Sized> PolicySubject for Arc<T> {
    fn role(&self) -> &str {
        (**self).role()
    }

    fn tags(&self) -> Option<&dyn TagHolder> {
        (**self).tags()
    }
}

/// A subject whose tag names are already in hand.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedUser {
    pub role: String,
    pub tag_names: Option<Vec<String>>,
}

impl TaggedUser {
    pub fn new(role: &str, tag_names: &[&str]) -> Self {
        Self {
            role: role.to_string(),
            tag_names: Some(tag_names.iter().map(|name| name.to_string()).collect()),
        }
    }

    pub fn without_tags(role: &str) -> Self {
        Self {
            role: role.to_string(),
            tag_names: None,
        }
    }
}

impl PolicySubject for TaggedUser {
    fn role(&self) -> &str {
        &self.role
    }

    fn tags(&self) -> Option<&dyn TagHolder> {
        self.tag_names.as_ref().map(|names| names as &dyn TagHolder)
    }
}

/// A stored user whose tags are looked up in the store on every check.
#[derive(Clone)]
pub struct StoredUser {
    pub user: user::Model,
    store: Arc<Store>,
}

impl StoredUser {
    pub fn new(user: user::Model, store: Arc<Store>) -> Self {
        Self { user, store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

impl fmt::Debug for StoredUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredUser")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl TagHolder for StoredUser {
    fn has_tag_named(&self, name: &str) -> Result<bool, TagLookupError> {
        Ok(TagAdapter::init(&self.store)
            .filter_eq_user(&self.user)
            .filter_eq_name(name)
            .exists()?)
    }

    fn has_any_tag_named(&self, names: &[&str]) -> Result<bool, TagLookupError> {
        Ok(TagAdapter::init(&self.store)
            .filter_eq_user(&self.user)
            .filter_in_names(names)
            .exists()?)
    }
}

impl PolicySubject for StoredUser {
    fn role(&self) -> &str {
        &self.user.role
    }

    fn tags(&self) -> Option<&dyn TagHolder> {
        Some(self)
    }
}
