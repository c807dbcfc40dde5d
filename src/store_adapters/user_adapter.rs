use uuid::Uuid;

use entities::user::Model;

use crate::{Store, StoreErr};

#[derive(Clone)]
pub struct UserAdapter<'a> {
    pub store: &'a Store,
}

impl<'a> UserAdapter<'a> {
    pub fn init(store: &'a Store) -> Self {
        Self { store }
    }
}

pub trait UserQuery {
    fn get_by_id(self, id: Uuid) -> Result<Option<Model>, StoreErr>;
}

impl UserQuery for UserAdapter<'_> {
    fn get_by_id(self, id: Uuid) -> Result<Option<Model>, StoreErr> {
        Ok(self
            .store
            .read()?
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }
}
