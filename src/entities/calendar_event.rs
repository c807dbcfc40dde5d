use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const EVENT_TASK: &str = "task";
pub const EVENT_PROJECT: &str = "project";
pub const EVENT_PAYMENT: &str = "payment";
pub const EVENT_DEADLINE: &str = "deadline";
pub const EVENT_MEETING: &str = "meeting";
pub const EVENT_MILESTONE: &str = "milestone";
pub const EVENT_CUSTOM: &str = "custom";

pub const PRIORITY_URGENT: &str = "urgent";
pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_LOW: &str = "low";

/// A calendar entry. `event_type` and `priority` are kept as open strings,
/// unknown values must survive a round trip untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_type: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    pub start_date: DateTime<FixedOffset>,
    pub end_date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub is_all_day: bool,
    pub user_id: Uuid,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default = "default_is_visible")]
    pub is_visible: bool,
}

fn default_priority() -> String {
    PRIORITY_MEDIUM.to_string()
}

fn default_is_visible() -> bool {
    true
}
