//! `minijinja` filters for the calendar and dashboard templates.
//!
//! ```jinja
//! {% if user|has_tag("muhasebeci") %}...{% endif %}
//! {{ event.event_type|get_event_type_display }}
//! {{ done|divisibleby(total) }}%
//! ```

use std::path::Path;

use minijinja::Environment;
use once_cell::sync::Lazy;

mod filters;
mod user_view;

pub use filters::*;
pub use user_view::UserView;

pub static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    environment_with_templates(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
});

pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter("has_tag", has_tag);
    env.add_filter("has_any_tag", has_any_tag);
    env.add_filter("has_permission_for_event_type", has_permission_for_event_type);
    env.add_filter("get_event_type_display", get_event_type_display);
    env.add_filter("get_priority_display", get_priority_display);
    env.add_filter("get_priority_class", get_priority_class);
    env.add_filter("file_extension", file_extension);
    env.add_filter("divisibleby", divisibleby);
}

pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    register_filters(&mut env);
    env
}

pub fn environment_with_templates(dir: impl AsRef<Path>) -> Environment<'static> {
    let mut env = environment();
    env.set_loader(minijinja::path_loader(dir));
    env
}
