//! Terminal rendering: messages, the month grid and the day timeline.

pub mod messages;
pub mod month;
pub mod timeline;
