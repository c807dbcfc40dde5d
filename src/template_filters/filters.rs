use minijinja::value::{Value, ValueKind};
use tracing::{event, Level};
use use_cases::{
    display::{self, Operand, DEFAULT_PRIORITY_CLASS},
    permissions,
};

use crate::user_view::UserView;

fn user_of(value: &Value) -> Option<&UserView> {
    let user = UserView::from_value(value);
    if user.is_none() && !value.is_none() && !value.is_undefined() {
        event!(
            Level::DEBUG,
            "Filter applied to a non-user value of kind {:?}",
            value.kind()
        );
    }
    user
}

/// `{{ user|has_tag("muhasebeci") }}`
pub fn has_tag(user: Value, tag_name: Value) -> bool {
    match tag_name.as_str() {
        Some(tag_name) => permissions::has_tag(user_of(&user), tag_name),
        None => false,
    }
}

/// `{{ user|has_any_tag("idea, makale") }}`
pub fn has_any_tag(user: Value, tag_names: Value) -> bool {
    if !tag_names.is_true() {
        return false;
    }
    match tag_names.as_str() {
        Some(tag_names) => permissions::has_any_tag(user_of(&user), tag_names),
        None => permissions::has_any_tag(user_of(&user), &tag_names.to_string()),
    }
}

/// `{{ user|has_permission_for_event_type(event.event_type) }}`
pub fn has_permission_for_event_type(user: Value, event_type: Value) -> bool {
    let event_type = event_type.as_str().unwrap_or_default();
    permissions::can_view(user_of(&user), event_type)
}

pub fn get_event_type_display(event_type: Value) -> Value {
    match event_type.as_str() {
        Some(s) => Value::from(display::get_event_type_display(s)),
        None => event_type,
    }
}

pub fn get_priority_display(priority: Value) -> Value {
    match priority.as_str() {
        Some(s) => Value::from(display::get_priority_display(s)),
        None => priority,
    }
}

pub fn get_priority_class(priority: Value) -> &'static str {
    priority
        .as_str()
        .map(display::get_priority_class)
        .unwrap_or(DEFAULT_PRIORITY_CLASS)
}

pub fn file_extension(path: Value) -> String {
    match path.as_str() {
        Some(path) => display::file_extension(path).to_string(),
        None => String::new(),
    }
}

fn operand(value: &Value) -> Operand<'_> {
    match value.kind() {
        ValueKind::Number => f64::try_from(value.clone())
            .map(Operand::Number)
            .unwrap_or(Operand::Missing),
        ValueKind::Bool => Operand::Number(if value.is_true() { 1.0 } else { 0.0 }),
        ValueKind::String => value.as_str().map(Operand::Text).unwrap_or(Operand::Missing),
        _ => Operand::Missing,
    }
}

/// `{{ 5|divisibleby(10) }}` renders `50.0`: a percentage, not a test.
/// Unusable operands render a plain `0`.
pub fn divisibleby(value: Value, arg: Value) -> Value {
    display::percentage(operand(&value), operand(&arg))
        .map(Value::from)
        .unwrap_or_else(|| Value::from(0))
}
