use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MUHASEBECI: &str = "muhasebeci";
pub const MUHASEBEADMIN: &str = "muhasebeadmin";
pub const IDEA: &str = "idea";
pub const MAKALE: &str = "makale";
pub const ADMINMAKALE: &str = "adminmakale";
pub const SELLER: &str = "seller";
pub const AI: &str = "ai";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
