use entities::{tag, user};
use uuid::Uuid;

pub fn user() -> user::Model {
    user::Model {
        id: Uuid::now_v7(),
        username: format!("user_{}", Uuid::now_v7().simple()),
        role: user::ROLE_TEAM_MEMBER.to_string(),
        tag_ids: vec![],
    }
}

pub trait UserFactory {
    fn role(self, role: &str) -> user::Model;
    fn username(self, username: &str) -> user::Model;
    fn with_tag(self, tag: &tag::Model) -> user::Model;
}

impl UserFactory for user::Model {
    fn role(mut self, role: &str) -> user::Model {
        self.role = role.to_string();
        self
    }

    fn username(mut self, username: &str) -> user::Model {
        self.username = username.to_string();
        self
    }

    fn with_tag(mut self, tag: &tag::Model) -> user::Model {
        self.tag_ids.push(tag.id);
        self
    }
}
