use chrono::NaiveDate;
use entities::project;
use uuid::Uuid;

pub fn project(end_date: NaiveDate) -> project::Model {
    project::Model {
        id: Uuid::now_v7(),
        name: "project".to_string(),
        end_date: Some(end_date),
        status: project::STATUS_ACTIVE.to_string(),
        manager_id: None,
        team_member_ids: vec![],
    }
}

pub trait ProjectFactory {
    fn name(self, name: &str) -> project::Model;
    fn status(self, status: &str) -> project::Model;
    fn manager_id(self, manager_id: Option<Uuid>) -> project::Model;
    fn team_member_ids(self, team_member_ids: Vec<Uuid>) -> project::Model;
}

impl ProjectFactory for project::Model {
    fn name(mut self, name: &str) -> project::Model {
        self.name = name.to_string();
        self
    }

    fn status(mut self, status: &str) -> project::Model {
        self.status = status.to_string();
        self
    }

    fn manager_id(mut self, manager_id: Option<Uuid>) -> project::Model {
        self.manager_id = manager_id;
        self
    }

    fn team_member_ids(mut self, team_member_ids: Vec<Uuid>) -> project::Model {
        self.team_member_ids = team_member_ids;
        self
    }
}
