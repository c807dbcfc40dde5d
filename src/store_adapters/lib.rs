use core::fmt;
use std::sync::Arc;

pub mod calendar_event_adapter;
pub mod notification_adapter;
pub mod project_adapter;
pub mod store;
pub mod tag_adapter;
pub mod task_adapter;
pub mod user_adapter;

pub use store::{Snapshot, Store};

#[derive(Debug, PartialEq)]
pub enum StoreErr {
    Io(String),
    Parse(String),
    Poisoned,
}

impl fmt::Display for StoreErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreErr::Io(e) => write!(f, "Io: {}", e),
            StoreErr::Parse(e) => write!(f, "Parse: {}", e),
            StoreErr::Poisoned => write!(f, "Poisoned"),
        }
    }
}

impl std::error::Error for StoreErr {}

type Predicate<M> = Arc<dyn Fn(&M) -> bool + Send + Sync>;

/// Accumulated filters of an adapter, evaluated against the snapshot when a
/// query method runs.
pub struct Select<M> {
    predicates: Vec<Predicate<M>>,
}

impl<M> Select<M> {
    pub fn new() -> Self {
        Self { predicates: vec![] }
    }

    pub fn filter(mut self, predicate: impl Fn(&M) -> bool + Send + Sync + 'static) -> Self {
        self.predicates.push(Arc::new(predicate));
        self
    }

    pub fn matches(&self, model: &M) -> bool {
        self.predicates.iter().all(|predicate| predicate(model))
    }
}

impl<M> Default for Select<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for Select<M> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
        }
    }
}
