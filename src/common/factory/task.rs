use chrono::NaiveDate;
use entities::task;
use uuid::Uuid;

pub fn task(due_date: NaiveDate) -> task::Model {
    task::Model {
        id: Uuid::now_v7(),
        title: "task".to_string(),
        project_id: None,
        due_date: Some(due_date),
        status: task::STATUS_TODO.to_string(),
        assignee_id: None,
        created_by_id: None,
    }
}

pub trait TaskFactory {
    fn title(self, title: &str) -> task::Model;
    fn status(self, status: &str) -> task::Model;
    fn project_id(self, project_id: Option<Uuid>) -> task::Model;
    fn assignee_id(self, assignee_id: Option<Uuid>) -> task::Model;
    fn created_by_id(self, created_by_id: Option<Uuid>) -> task::Model;
}

impl TaskFactory for task::Model {
    fn title(mut self, title: &str) -> task::Model {
        self.title = title.to_string();
        self
    }

    fn status(mut self, status: &str) -> task::Model {
        self.status = status.to_string();
        self
    }

    fn project_id(mut self, project_id: Option<Uuid>) -> task::Model {
        self.project_id = project_id;
        self
    }

    fn assignee_id(mut self, assignee_id: Option<Uuid>) -> task::Model {
        self.assignee_id = assignee_id;
        self
    }

    fn created_by_id(mut self, created_by_id: Option<Uuid>) -> task::Model {
        self.created_by_id = created_by_id;
        self
    }
}
