use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const STATUS_NOT_STARTED: &str = "not_started";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_ON_HOLD: &str = "on_hold";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_PLANNING: &str = "planning";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: Uuid,
    pub name: String,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub manager_id: Option<Uuid>,
    #[serde(default)]
    pub team_member_ids: Vec<Uuid>,
}
