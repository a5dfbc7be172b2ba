use super::event_type::{self, EventType};
use crate::utils::time::wall_clock;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A calendar event as persisted in the durable slot.
///
/// Field names follow the stored JSON layout (`startTime`, `endTime`,
/// `type`), so collections written by earlier versions load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(with = "wall_clock")]
    pub start_time: NaiveDateTime,
    #[serde(with = "wall_clock")]
    pub end_time: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "event_type::deserialize_lenient"
    )]
    pub kind: Option<EventType>,
}

/// An event that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub description: Option<String>,
    pub kind: Option<EventType>,
}

impl EventDraft {
    pub fn new(name: &str, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            name: name.to_string(),
            start_time,
            end_time,
            description: None,
            kind: Some(EventType::Other),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_kind(mut self, kind: EventType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub(crate) fn into_event(self, id: String) -> Event {
        Event {
            id,
            name: self.name,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description,
            kind: self.kind,
        }
    }
}

impl Event {
    /// Calendar day the event belongs to (day of its start).
    pub fn day(&self) -> NaiveDate {
        self.start_time.date()
    }

    pub fn color_token(&self) -> &'static str {
        event_type::color_token(self.kind)
    }

    pub fn kind_str(&self) -> &'static str {
        self.kind.map(|k| k.et_as_str()).unwrap_or("")
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Case-insensitive substring match on name or description.
    pub fn matches(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    pub fn time_range_str(&self, time_format: &str) -> String {
        format!(
            "{} - {}",
            self.start_time.format(time_format),
            self.end_time.format(time_format)
        )
    }
}
