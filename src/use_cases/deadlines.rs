//! Daily reminder about projects and tasks whose deadline is near.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate};
use tracing::{event, instrument, Level};
use uuid::Uuid;

use entities::{
    notification::NotificationType,
    project::{self, STATUS_ACTIVE, STATUS_PLANNING},
    task::{self, STATUS_IN_PROGRESS, STATUS_REVIEW, STATUS_TODO},
};
use store_adapters::{
    notification_adapter::{
        CreateNotificationParams, NotificationAdapter, NotificationFilter, NotificationMutation,
        NotificationQuery,
    },
    project_adapter::{ProjectAdapter, ProjectFilter, ProjectQuery},
    task_adapter::{TaskAdapter, TaskFilter, TaskQuery},
    Store,
};

use crate::{error_500, UseCaseError};

pub const PROJECT_DEADLINE_TITLE: &str = "Yaklaşan Proje Teslim Tarihi";
pub const TASK_DEADLINE_TITLE: &str = "Yaklaşan Görev Teslim Tarihi";
pub const DEFAULT_WINDOW_DAYS: i64 = 3;

const PENDING_PROJECT_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_PLANNING];
const PENDING_TASK_STATUSES: &[&str] = &[STATUS_TODO, STATUS_IN_PROGRESS, STATUS_REVIEW];

#[derive(Debug, Clone, Copy)]
pub struct DeadlineCheckParams {
    /// Wall-clock time of the run in the deployment's offset. Its date is
    /// "today" for the window and for de-duplication.
    pub now: DateTime<FixedOffset>,
    pub window_days: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeadlineCheckReport {
    pub notifications_created: usize,
}

impl DeadlineCheckReport {
    pub fn summary(&self) -> String {
        format!(
            "{} adet yaklaşan teslim tarihi bildirimi oluşturuldu.",
            self.notifications_created
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Audience {
    ProjectTeam,
    TaskAssignee,
    TaskCreator,
    TaskProjectManager,
}

fn deadline_message(audience: Audience, days_left: i64, name: &str) -> String {
    let subject = match audience {
        Audience::ProjectTeam => "Projenin",
        Audience::TaskAssignee => "Görevin",
        Audience::TaskCreator => "Oluşturduğunuz görevin",
        Audience::TaskProjectManager => "Projenizin bir görevinin",
    };
    match days_left {
        0 => format!("{} teslim tarihi bugün: {}", subject, name),
        1 => format!("{} teslim tarihi yarın: {}", subject, name),
        n => format!("{} teslimine {} gün kaldı: {}", subject, n, name),
    }
}

#[derive(Clone, Copy)]
enum Related {
    Project(Uuid),
    Task { task_id: Uuid, project_id: Option<Uuid> },
}

struct Run<'a> {
    store: &'a Store,
    now: DateTime<FixedOffset>,
    today: NaiveDate,
    created: usize,
}

impl Run<'_> {
    /// Creates the notification unless `recipient` already got one with the
    /// same title about the same object today.
    fn notify(
        &mut self,
        recipient_id: Uuid,
        title: &str,
        content: String,
        related: Related,
    ) -> Result<(), UseCaseError> {
        let already_sent = NotificationAdapter::init(self.store)
            .filter_eq_recipient_id(recipient_id)
            .filter_eq_title(title)
            .filter_created_on(self.today, *self.now.offset());
        let already_sent = match related {
            Related::Project(project_id) => already_sent.filter_eq_related_project_id(project_id),
            Related::Task { task_id, .. } => already_sent.filter_eq_related_task_id(task_id),
        }
        .exists()
        .map_err(error_500)?;
        if already_sent {
            return Ok(());
        }

        let (related_project_id, related_task_id) = match related {
            Related::Project(project_id) => (Some(project_id), None),
            Related::Task {
                task_id,
                project_id,
            } => (project_id, Some(task_id)),
        };
        NotificationAdapter::init(self.store)
            .create(CreateNotificationParams {
                recipient_id,
                title: title.to_string(),
                content,
                notification_type: NotificationType::Warning,
                related_project_id,
                related_task_id,
                created_at: self.now,
            })
            .map_err(error_500)?;
        self.created += 1;
        Ok(())
    }

    fn days_left(&self, deadline: Option<NaiveDate>) -> i64 {
        deadline
            .map(|deadline| (deadline - self.today).num_days())
            .unwrap_or_default()
    }

    fn process_project(&mut self, project: &project::Model) -> Result<(), UseCaseError> {
        let content = deadline_message(
            Audience::ProjectTeam,
            self.days_left(project.end_date),
            &project.name,
        );

        if let Some(manager_id) = project.manager_id {
            self.notify(
                manager_id,
                PROJECT_DEADLINE_TITLE,
                content.clone(),
                Related::Project(project.id),
            )?;
        }
        for member_id in &project.team_member_ids {
            if Some(*member_id) == project.manager_id {
                continue;
            }
            self.notify(
                *member_id,
                PROJECT_DEADLINE_TITLE,
                content.clone(),
                Related::Project(project.id),
            )?;
        }
        Ok(())
    }

    fn process_task(&mut self, task: &task::Model) -> Result<(), UseCaseError> {
        let days_left = self.days_left(task.due_date);
        let related = || Related::Task {
            task_id: task.id,
            project_id: task.project_id,
        };

        if let Some(assignee_id) = task.assignee_id {
            self.notify(
                assignee_id,
                TASK_DEADLINE_TITLE,
                deadline_message(Audience::TaskAssignee, days_left, &task.title),
                related(),
            )?;
        }

        if let Some(creator_id) = task.created_by_id {
            if Some(creator_id) != task.assignee_id {
                self.notify(
                    creator_id,
                    TASK_DEADLINE_TITLE,
                    deadline_message(Audience::TaskCreator, days_left, &task.title),
                    related(),
                )?;
            }
        }

        if let Some(manager_id) = self.project_manager_of(task)? {
            if Some(manager_id) != task.assignee_id && Some(manager_id) != task.created_by_id {
                self.notify(
                    manager_id,
                    TASK_DEADLINE_TITLE,
                    deadline_message(Audience::TaskProjectManager, days_left, &task.title),
                    related(),
                )?;
            }
        }
        Ok(())
    }

    fn project_manager_of(&self, task: &task::Model) -> Result<Option<Uuid>, UseCaseError> {
        let Some(project_id) = task.project_id else {
            return Ok(None);
        };
        match ProjectAdapter::init(self.store)
            .get_by_id(project_id)
            .map_err(error_500)?
        {
            Some(project) => Ok(project.manager_id),
            None => {
                event!(
                    Level::WARN,
                    %project_id,
                    task_id = %task.id,
                    "Task refers to a project that does not exist."
                );
                Ok(None)
            }
        }
    }
}

/// Notifies everyone involved in projects and tasks due within
/// `[today, today + window_days]` that are still open.
#[instrument(skip(store))]
pub fn check_approaching_deadlines(
    store: &Store,
    params: DeadlineCheckParams,
) -> Result<DeadlineCheckReport, UseCaseError> {
    if params.window_days < 0 {
        return Err(UseCaseError::BadRequest(format!(
            "window_days must not be negative: {}",
            params.window_days
        )));
    }
    let today = params.now.date_naive();
    let until = today + Duration::days(params.window_days);

    let projects = ProjectAdapter::init(store)
        .filter_end_date_between(today, until)
        .filter_in_statuses(PENDING_PROJECT_STATUSES)
        .get_all()
        .map_err(error_500)?;
    let tasks = TaskAdapter::init(store)
        .filter_due_date_between(today, until)
        .filter_in_statuses(PENDING_TASK_STATUSES)
        .get_all()
        .map_err(error_500)?;
    event!(
        Level::INFO,
        "Will process {} projects and {} tasks",
        projects.len(),
        tasks.len()
    );

    let mut run = Run {
        store,
        now: params.now,
        today,
        created: 0,
    };
    for project in &projects {
        run.process_project(project)?;
    }
    for task in &tasks {
        run.process_task(task)?;
    }

    Ok(DeadlineCheckReport {
        notifications_created: run.created,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use common::factory::{self, *};
    use entities::project::STATUS_COMPLETED;
    use store_adapters::Snapshot;

    use super::*;

    fn now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 10, 9, 0, 0)
            .unwrap()
    }

    fn params() -> DeadlineCheckParams {
        DeadlineCheckParams {
            now: now(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    fn in_days(days: i64) -> NaiveDate {
        now().date_naive() + Duration::days(days)
    }

    fn contents_for(store: &Store, recipient_id: Uuid) -> Vec<String> {
        NotificationAdapter::init(store)
            .filter_eq_recipient_id(recipient_id)
            .get_all()
            .unwrap()
            .into_iter()
            .map(|notification| notification.content)
            .collect()
    }

    #[test]
    fn deadline_messages() {
        assert_eq!(
            deadline_message(Audience::ProjectTeam, 0, "Apollo"),
            "Projenin teslim tarihi bugün: Apollo"
        );
        assert_eq!(
            deadline_message(Audience::TaskAssignee, 1, "Fix login"),
            "Görevin teslim tarihi yarın: Fix login"
        );
        assert_eq!(
            deadline_message(Audience::TaskCreator, 3, "Fix login"),
            "Oluşturduğunuz görevin teslimine 3 gün kaldı: Fix login"
        );
        assert_eq!(
            deadline_message(Audience::TaskProjectManager, 2, "Fix login"),
            "Projenizin bir görevinin teslimine 2 gün kaldı: Fix login"
        );
    }

    #[test]
    fn notifies_project_manager_and_team_once_each() -> Result<(), UseCaseError> {
        let manager = factory::user();
        let member = factory::user();
        let project = factory::project(in_days(1))
            .name("Apollo")
            .manager_id(Some(manager.id))
            .team_member_ids(vec![manager.id, member.id]);
        let store = Store::in_memory(Snapshot {
            projects: vec![project],
            ..Default::default()
        });

        let report = check_approaching_deadlines(&store, params())?;

        assert_eq!(report.notifications_created, 2);
        assert_eq!(
            contents_for(&store, manager.id),
            vec!["Projenin teslim tarihi yarın: Apollo".to_string()]
        );
        assert_eq!(
            contents_for(&store, member.id),
            vec!["Projenin teslim tarihi yarın: Apollo".to_string()]
        );
        Ok(())
    }

    #[test]
    fn skips_projects_outside_window_or_closed() -> Result<(), UseCaseError> {
        let manager = factory::user();
        let store = Store::in_memory(Snapshot {
            projects: vec![
                factory::project(in_days(-1)).manager_id(Some(manager.id)),
                factory::project(in_days(4)).manager_id(Some(manager.id)),
                factory::project(in_days(2))
                    .status(STATUS_COMPLETED)
                    .manager_id(Some(manager.id)),
            ],
            ..Default::default()
        });

        let report = check_approaching_deadlines(&store, params())?;

        assert_eq!(report, DeadlineCheckReport::default());
        Ok(())
    }

    #[test]
    fn task_audiences_are_distinct() -> Result<(), UseCaseError> {
        let assignee = factory::user();
        let creator = factory::user();
        let manager = factory::user();
        let project = factory::project(in_days(30)).manager_id(Some(manager.id));
        let task = factory::task(in_days(3))
            .title("Fix login")
            .project_id(Some(project.id))
            .assignee_id(Some(assignee.id))
            .created_by_id(Some(creator.id));
        let store = Store::in_memory(Snapshot {
            projects: vec![project.clone()],
            tasks: vec![task.clone()],
            ..Default::default()
        });

        let report = check_approaching_deadlines(&store, params())?;

        assert_eq!(report.notifications_created, 3);
        assert_eq!(
            contents_for(&store, assignee.id),
            vec!["Görevin teslimine 3 gün kaldı: Fix login".to_string()]
        );
        assert_eq!(
            contents_for(&store, creator.id),
            vec!["Oluşturduğunuz görevin teslimine 3 gün kaldı: Fix login".to_string()]
        );
        assert_eq!(
            contents_for(&store, manager.id),
            vec!["Projenizin bir görevinin teslimine 3 gün kaldı: Fix login".to_string()]
        );

        let for_manager = NotificationAdapter::init(&store)
            .filter_eq_recipient_id(manager.id)
            .get_all()
            .unwrap();
        assert_eq!(for_manager[0].related_project_id, Some(project.id));
        assert_eq!(for_manager[0].related_task_id, Some(task.id));
        assert_eq!(for_manager[0].title, TASK_DEADLINE_TITLE);
        assert_eq!(for_manager[0].notification_type, NotificationType::Warning);
        Ok(())
    }

    #[test]
    fn self_assigned_task_notifies_once() -> Result<(), UseCaseError> {
        let owner = factory::user();
        let project = factory::project(in_days(30)).manager_id(Some(owner.id));
        let task = factory::task(in_days(0))
            .title("Ship it")
            .project_id(Some(project.id))
            .assignee_id(Some(owner.id))
            .created_by_id(Some(owner.id));
        let store = Store::in_memory(Snapshot {
            projects: vec![project],
            tasks: vec![task],
            ..Default::default()
        });

        let report = check_approaching_deadlines(&store, params())?;

        assert_eq!(report.notifications_created, 1);
        assert_eq!(
            contents_for(&store, owner.id),
            vec!["Görevin teslim tarihi bugün: Ship it".to_string()]
        );
        Ok(())
    }

    #[test]
    fn unassigned_task_still_notifies_creator() -> Result<(), UseCaseError> {
        let creator = factory::user();
        let task = factory::task(in_days(2)).created_by_id(Some(creator.id));
        let store = Store::in_memory(Snapshot {
            tasks: vec![task],
            ..Default::default()
        });

        let report = check_approaching_deadlines(&store, params())?;

        assert_eq!(report.notifications_created, 1);
        Ok(())
    }

    #[test]
    fn second_run_on_same_day_creates_nothing() -> Result<(), UseCaseError> {
        let manager = factory::user();
        let assignee = factory::user();
        let store = Store::in_memory(Snapshot {
            projects: vec![factory::project(in_days(2)).manager_id(Some(manager.id))],
            tasks: vec![factory::task(in_days(1)).assignee_id(Some(assignee.id))],
            ..Default::default()
        });

        let first = check_approaching_deadlines(&store, params())?;
        let second = check_approaching_deadlines(
            &store,
            DeadlineCheckParams {
                now: now() + Duration::hours(5),
                ..params()
            },
        )?;
        let next_day = check_approaching_deadlines(
            &store,
            DeadlineCheckParams {
                now: now() + Duration::days(1),
                ..params()
            },
        )?;

        assert_eq!(first.notifications_created, 2);
        assert_eq!(second.notifications_created, 0);
        assert_eq!(next_day.notifications_created, 2);
        Ok(())
    }

    #[test]
    fn existing_notifications_only_suppress_their_own_object() -> Result<(), UseCaseError> {
        let manager = factory::user();
        let apollo = factory::project(in_days(1)).manager_id(Some(manager.id));
        let gemini = factory::project(in_days(1)).manager_id(Some(manager.id));
        let task = factory::task(in_days(1)).assignee_id(Some(manager.id));
        let earlier_today = now() - Duration::hours(2);
        let store = Store::in_memory(Snapshot {
            projects: vec![apollo.clone(), gemini.clone()],
            tasks: vec![task.clone()],
            notifications: vec![
                factory::notification(manager.id)
                    .title(PROJECT_DEADLINE_TITLE)
                    .related_project_id(Some(apollo.id))
                    .created_at(earlier_today),
                factory::notification(manager.id)
                    .title(TASK_DEADLINE_TITLE)
                    .related_task_id(Some(task.id))
                    .created_at(earlier_today),
                factory::notification(manager.id)
                    .title(PROJECT_DEADLINE_TITLE)
                    .related_project_id(Some(gemini.id))
                    .created_at(earlier_today - Duration::days(1)),
            ],
            ..Default::default()
        });

        let report = check_approaching_deadlines(&store, params())?;

        assert_eq!(report.notifications_created, 1);
        let created = NotificationAdapter::init(&store)
            .filter_eq_related_project_id(gemini.id)
            .filter_created_on(now().date_naive(), *now().offset())
            .get_all()
            .map_err(error_500)?;
        assert_eq!(created.len(), 1);
        Ok(())
    }

    #[test]
    fn negative_window_is_rejected() {
        let store = Store::in_memory(Snapshot::default());
        let res = check_approaching_deadlines(
            &store,
            DeadlineCheckParams {
                now: now(),
                window_days: -1,
            },
        );
        assert!(matches!(res, Err(UseCaseError::BadRequest(_))));
    }

    #[test]
    fn summary_line() {
        let report = DeadlineCheckReport {
            notifications_created: 4,
        };
        assert_eq!(
            report.summary(),
            "4 adet yaklaşan teslim tarihi bildirimi oluşturuldu."
        );
    }
}
