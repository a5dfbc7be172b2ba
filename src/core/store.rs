//! In-memory event collection: the single source of truth for every view.
//!
//! The store never touches the durable slot itself. Callers load it with
//! `db::events::load_store` and must call `db::events::save_store` after
//! every mutation.

use crate::errors::AppResult;
use crate::models::event::{Event, EventDraft};
use chrono::{Local, NaiveDate, NaiveDateTime};

#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    last_issued: i64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: Vec<Event>) -> Self {
        Self {
            events,
            last_issued: 0,
        }
    }

    /// Parse a JSON array of events (slot content or JSON export).
    pub fn from_json(text: &str) -> AppResult<Self> {
        let events: Vec<Event> = serde_json::from_str(text)?;
        Ok(Self::from_events(events))
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.events)?)
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&self.events)?)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Add a new event with a fresh id derived from the current time.
    pub fn create(&mut self, draft: EventDraft) -> Event {
        let id = self.next_id();
        let event = draft.into_event(id);
        self.events.push(event.clone());
        event
    }

    /// Replace the event with the given id. The stored id always wins over
    /// the one carried by `event`. Unknown id → no-op.
    pub fn update(&mut self, id: &str, event: Event) -> Option<Event> {
        let slot = self.events.iter_mut().find(|e| e.id == id)?;
        *slot = Event {
            id: slot.id.clone(),
            ..event
        };
        Some(slot.clone())
    }

    /// Remove the event with the given id. Unknown id → no-op.
    pub fn delete(&mut self, id: &str) {
        self.events.retain(|e| e.id != id);
    }

    /// Move an event to new absolute start/end timestamps, leaving every
    /// other field untouched.
    pub fn reschedule(
        &mut self,
        id: &str,
        new_start: NaiveDateTime,
        new_end: NaiveDateTime,
    ) -> Option<Event> {
        let slot = self.events.iter_mut().find(|e| e.id == id)?;
        slot.start_time = new_start;
        slot.end_time = new_end;
        Some(slot.clone())
    }

    /// Events starting on the given calendar day, in collection order.
    pub fn events_on_day(&self, date: NaiveDate) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.day() == date)
            .cloned()
            .collect()
    }

    /// Events whose name or description contains `keyword`, ignoring case.
    pub fn events_matching(&self, keyword: &str) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.matches(keyword))
            .cloned()
            .collect()
    }

    /// Milliseconds since the epoch, kept strictly increasing within this
    /// store so that back-to-back creations never share an id.
    fn next_id(&mut self) -> String {
        let now = Local::now().timestamp_millis();
        let id = if now > self.last_issued {
            now
        } else {
            self.last_issued + 1
        };
        self.last_issued = id;
        id.to_string()
    }
}
