use crate::core::calculator::layout::{LayoutOptions, layout};
use crate::core::store::EventStore;
use crate::models::positioned_event::PositionedEvent;
use chrono::NaiveDate;

/// Everything the day timeline needs to draw one day.
#[derive(Debug, Clone)]
pub struct DayView {
    pub date: NaiveDate,
    pub filter: Option<String>,
    pub events: Vec<PositionedEvent>,
}

pub struct Core;

impl Core {
    /// Day events, narrowed by the optional keyword, laid out for the
    /// timeline. Recomputed on every call.
    pub fn build_day_view(
        store: &EventStore,
        date: NaiveDate,
        filter: Option<&str>,
        opts: &LayoutOptions,
    ) -> DayView {
        let mut day_events = store.events_on_day(date);

        if let Some(keyword) = filter {
            day_events.retain(|e| e.matches(keyword));
        }

        DayView {
            date,
            filter: filter.map(str::to_string),
            events: layout(&day_events, opts),
        }
    }
}
