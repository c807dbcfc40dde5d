use std::{collections::HashMap, sync::Arc};

use tracing::instrument;
use uuid::Uuid;

use entities::calendar_event;
use store_adapters::{
    calendar_event_adapter::{CalendarEventAdapter, CalendarEventFilter, CalendarEventQuery},
    user_adapter::{UserAdapter, UserQuery},
    Store,
};

use crate::{
    error_500,
    permissions::{can_view, StoredUser},
    UseCaseError,
};

/// The user's own visible events, minus the categories the user may not see.
#[instrument(skip_all, fields(user_id = %user.user.id))]
pub fn list_visible_events(user: &StoredUser) -> Result<Vec<calendar_event::Model>, UseCaseError> {
    let events = CalendarEventAdapter::init(user.store())
        .filter_eq_user_id(user.user.id)
        .filter_eq_is_visible(true)
        .get_all()
        .map_err(error_500)?;

    let mut decisions: HashMap<String, bool> = HashMap::new();
    Ok(events
        .into_iter()
        .filter(|event| {
            *decisions
                .entry(event.event_type.clone())
                .or_insert_with(|| can_view(Some(user), &event.event_type))
        })
        .collect())
}

#[instrument(skip(store))]
pub fn list_visible_events_for_user(
    store: Arc<Store>,
    user_id: Uuid,
) -> Result<Vec<calendar_event::Model>, UseCaseError> {
    let user = UserAdapter::init(&store)
        .get_by_id(user_id)
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound("User not found.".to_string()))?;
    list_visible_events(&StoredUser::new(user, store))
}
