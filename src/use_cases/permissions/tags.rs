use tracing::{event, Level};

use super::types::PolicySubject;

/// `true` iff `user` is present, carries tags, and one of them is exactly
/// `tag_name`.
pub fn has_tag<U: PolicySubject + ?Sized>(user: Option<&U>, tag_name: &str) -> bool {
    let Some(tags) = user.and_then(|user| user.tags()) else {
        return false;
    };
    match tags.has_tag_named(tag_name) {
        Ok(found) => found,
        Err(e) => {
            event!(Level::WARN, tag_name, "Tag lookup failed: {}", e);
            false
        }
    }
}

/// `tag_names` is a comma separated list. Blank entries are ignored; an
/// effectively empty list never matches.
pub fn has_any_tag<U: PolicySubject + ?Sized>(user: Option<&U>, tag_names: &str) -> bool {
    let Some(tags) = user.and_then(|user| user.tags()) else {
        return false;
    };
    let names = parse_tag_names(tag_names);
    if names.is_empty() {
        return false;
    }
    match tags.has_any_tag_named(&names) {
        Ok(found) => found,
        Err(e) => {
            event!(Level::WARN, tag_names, "Tag lookup failed: {}", e);
            false
        }
    }
}

pub fn parse_tag_names(tag_names: &str) -> Vec<&str> {
    tag_names
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}
