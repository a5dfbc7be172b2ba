//! Domain models: events, their categories and derived layout records.

pub mod drop_outcome;
pub mod event;
pub mod event_type;
pub mod positioned_event;
