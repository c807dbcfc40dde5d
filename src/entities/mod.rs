pub mod calendar_event;
pub mod notification;
pub mod project;
pub mod tag;
pub mod task;
pub mod user;
