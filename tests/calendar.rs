use common::factory::{self, *};
use entities::{
    calendar_event::{EVENT_MEETING, EVENT_PAYMENT, EVENT_PROJECT, EVENT_TASK},
    tag,
    user::{ROLE_ADMIN, ROLE_TEAM_MEMBER},
};
use store_adapters::Snapshot;
use use_cases::{calendar::list_visible_events, permissions::StoredUser, UseCaseError};

use crate::utils::TempStore;

fn categories(events: &[entities::calendar_event::Model]) -> Vec<&str> {
    events.iter().map(|e| e.event_type.as_str()).collect()
}

#[test]
fn accountant_sees_payments_but_not_projects() -> Result<(), UseCaseError> {
    let muhasebeadmin = factory::tag(tag::MUHASEBEADMIN);
    let accountant = factory::user()
        .role(ROLE_TEAM_MEMBER)
        .with_tag(&muhasebeadmin);
    let earlier = chrono::DateTime::parse_from_rfc3339("2025-03-10T09:00:00+03:00").unwrap();
    let later = chrono::DateTime::parse_from_rfc3339("2025-03-11T09:00:00+03:00").unwrap();
    let snapshot = Snapshot {
        users: vec![accountant.clone()],
        tags: vec![muhasebeadmin],
        calendar_events: vec![
            factory::calendar_event(accountant.id, EVENT_PAYMENT).start_date(later),
            factory::calendar_event(accountant.id, EVENT_PROJECT).start_date(earlier),
            factory::calendar_event(accountant.id, EVENT_TASK).start_date(earlier),
        ],
        ..Default::default()
    };
    let temp = TempStore::new(&snapshot).unwrap();
    let store = temp.open().unwrap();

    let events = list_visible_events(&StoredUser::new(accountant, store))?;

    assert_eq!(categories(&events), vec![EVENT_TASK, EVENT_PAYMENT]);
    Ok(())
}

#[test]
fn admin_without_tags_sees_projects_but_not_payments() -> Result<(), UseCaseError> {
    let admin = factory::user().role(ROLE_ADMIN);
    let snapshot = Snapshot {
        users: vec![admin.clone()],
        calendar_events: vec![
            factory::calendar_event(admin.id, EVENT_PAYMENT),
            factory::calendar_event(admin.id, EVENT_PROJECT),
            factory::calendar_event(admin.id, EVENT_MEETING).is_visible(false),
            factory::calendar_event(admin.id, "custom"),
        ],
        ..Default::default()
    };
    let temp = TempStore::new(&snapshot).unwrap();
    let store = temp.open().unwrap();

    let events = list_visible_events(&StoredUser::new(admin, store))?;

    let mut seen = categories(&events);
    seen.sort();
    assert_eq!(seen, vec!["custom", EVENT_PROJECT]);
    Ok(())
}
