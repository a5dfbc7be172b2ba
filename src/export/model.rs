// src/export/model.rs

use crate::models::event::Event;

/// Header row of the CSV export, in column order.
pub const CSV_HEADERS: [&str; 8] = [
    "ID",
    "Name",
    "Start Date",
    "Start Time",
    "End Date",
    "End Time",
    "Description",
    "Tag",
];

/// Flat, already formatted view of an event for tabular export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub description: String,
    pub tag: String,
}

impl EventExport {
    pub fn from_event(ev: &Event, date_format: &str, time_format: &str) -> Self {
        Self {
            id: ev.id.clone(),
            name: ev.name.clone(),
            start_date: ev.start_time.format(date_format).to_string(),
            start_time: ev.start_time.format(time_format).to_string(),
            end_date: ev.end_time.format(date_format).to_string(),
            end_time: ev.end_time.format(time_format).to_string(),
            description: ev.description.clone().unwrap_or_default(),
            tag: ev.kind_str().to_string(),
        }
    }

    /// Cells in `CSV_HEADERS` order.
    pub(crate) fn to_row(&self) -> [&str; 8] {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.start_date.as_str(),
            self.start_time.as_str(),
            self.end_date.as_str(),
            self.end_time.as_str(),
            self.description.as_str(),
            self.tag.as_str(),
        ]
    }
}
