use crate::config::Config;
use crate::models::event::Event;
use crate::models::positioned_event::PositionedEvent;
use crate::utils::time::minutes_since_midnight;
use chrono::NaiveDateTime;

/// Geometry parameters of the day timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Share of the row available to events (0.95 leaves a gutter).
    pub width_budget: f64,
    pub pixels_per_minute: f64,
    /// Lower bound for `height`; zero-length or inverted events get this.
    pub min_height: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width_budget: 0.95,
            pixels_per_minute: 80.0 / 60.0,
            min_height: 0.0,
        }
    }
}

impl From<&Config> for LayoutOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            width_budget: cfg.width_budget,
            pixels_per_minute: cfg.pixels_per_hour / 60.0,
            min_height: cfg.min_event_height,
        }
    }
}

/// Bookkeeping entry for a placed event. Never retired during a layout
/// pass: every earlier event keeps competing for its column.
#[derive(Debug, Clone, Copy)]
struct OpenColumn {
    end: NaiveDateTime,
    column: usize,
}

/// Position the events of a single day.
///
/// Events are sorted by start (stable, so ties keep input order). Each one
/// takes the lowest column not held by a record that is still open at its
/// start, and its width is the budget split across all records open at
/// that instant, stale ones included.
pub fn layout(events: &[Event], opts: &LayoutOptions) -> Vec<PositionedEvent> {
    if events.is_empty() {
        return Vec::new();
    }

    // -----------------------------
    // Sort events chronologically
    // -----------------------------
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.start_time);

    let mut columns: Vec<OpenColumn> = Vec::with_capacity(sorted.len());
    let mut positioned = Vec::with_capacity(sorted.len());

    for event in sorted {
        let start = event.start_time;

        // -----------------------------
        // Lowest free column
        // -----------------------------
        let mut column = 0;
        while columns
            .iter()
            .any(|c| c.column == column && c.end > start)
        {
            column += 1;
        }

        columns.push(OpenColumn {
            end: event.end_time,
            column,
        });

        // A zero-length event alone on the row has no live record of its own.
        let overlap_count = columns.iter().filter(|c| c.end > start).count().max(1);

        let width_fraction = opts.width_budget / overlap_count as f64;
        let left_fraction = column as f64 * width_fraction;

        let (top_offset, height) = vertical_geometry(&event, opts);

        positioned.push(PositionedEvent {
            event,
            column,
            overlap_count,
            width_fraction,
            left_fraction,
            top_offset,
            height,
        });
    }

    positioned
}

/// Top offset and height from minute-of-day. Events crossing midnight are
/// not special-cased: the raw difference is clamped to `min_height`.
pub fn vertical_geometry(event: &Event, opts: &LayoutOptions) -> (f64, f64) {
    let start_minutes = minutes_since_midnight(&event.start_time);
    let end_minutes = minutes_since_midnight(&event.end_time);

    let top = start_minutes as f64 * opts.pixels_per_minute;
    let raw_height = (end_minutes - start_minutes) as f64 * opts.pixels_per_minute;

    (top, raw_height.max(opts.min_height))
}
