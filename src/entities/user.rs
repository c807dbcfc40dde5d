use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_PROJECT_MANAGER: &str = "project_manager";
pub const ROLE_TEAM_MEMBER: &str = "team_member";
pub const ROLE_GUEST: &str = "guest";

/// Account as seen by this service. Tag membership is many-to-many, so the
/// user only keeps references into the shared tag table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: Uuid,
    pub username: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

fn default_role() -> String {
    ROLE_TEAM_MEMBER.to_string()
}
