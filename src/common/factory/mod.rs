mod calendar_event;
mod notification;
mod project;
mod tag;
mod task;
mod user;

pub use calendar_event::*;
pub use notification::*;
pub use project::*;
pub use tag::*;
pub use task::*;
pub use user::*;
