use entities::tag;
use uuid::Uuid;

pub fn tag(name: &str) -> tag::Model {
    tag::Model {
        id: Uuid::now_v7(),
        name: name.to_string(),
        description: String::new(),
    }
}
