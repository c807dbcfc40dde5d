//! Who may see what.
//!
//! Every check here answers with a plain `bool`: failures while resolving a
//! user's tags are logged and count as "tag not present".

mod event_visibility;
mod tags;
pub mod types;

pub use event_visibility::{can_view, rule_for, CategoryRule};
pub use tags::{has_any_tag, has_tag, parse_tag_names};
pub use types::{PolicySubject, StoredUser, TagHolder, TagLookupError, TaggedUser};
