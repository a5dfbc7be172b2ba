use crate::core::store::EventStore;
use crate::models::event::Event;
use crate::models::event_type::token_colour;
use crate::utils::colors::{GREY, INVERSE, RESET};
use crate::utils::date::{month_grid, month_title, same_month};
use crate::utils::formatting::{pad_right, truncate};
use chrono::{Datelike, NaiveDate};

const CELL_WIDTH: usize = 14;
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One cell of the month view.
#[derive(Debug, Clone)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub events: Vec<Event>,
}

/// Build the 42 cells of the month containing `month`, with each day's
/// events sorted by start.
pub fn month_cells(store: &EventStore, month: NaiveDate, today: NaiveDate) -> Vec<DayCell> {
    month_grid(month)
        .into_iter()
        .map(|date| {
            let mut events = store.events_on_day(date);
            events.sort_by_key(|e| e.start_time);
            DayCell {
                date,
                in_month: same_month(date, month),
                is_today: date == today,
                events,
            }
        })
        .collect()
}

fn day_line(cell: &DayCell) -> String {
    let count = if cell.events.is_empty() {
        String::new()
    } else {
        format!(" •{}", cell.events.len())
    };
    let text = pad_right(&format!("{:>2}{}", cell.date.day(), count), CELL_WIDTH);

    if cell.is_today {
        format!("{INVERSE}{text}{RESET}")
    } else if !cell.in_month {
        format!("{GREY}{text}{RESET}")
    } else {
        text
    }
}

fn event_line(cell: &DayCell) -> String {
    match cell.events.first() {
        Some(ev) => {
            let name = pad_right(&truncate(&ev.name, CELL_WIDTH - 1), CELL_WIDTH);
            token_colour(ev.color_token()).paint(name).to_string()
        }
        None => " ".repeat(CELL_WIDTH),
    }
}

pub fn render_month(cells: &[DayCell], month: NaiveDate) -> String {
    let mut out = format!("{}\n", month_title(month));

    for wd in WEEKDAYS {
        out.push_str(&pad_right(wd, CELL_WIDTH));
        out.push('│');
    }
    out.push('\n');

    for week in cells.chunks(7) {
        for cell in week {
            out.push_str(&day_line(cell));
            out.push('│');
        }
        out.push('\n');
        for cell in week {
            out.push_str(&event_line(cell));
            out.push('│');
        }
        out.push('\n');
        out.push_str(&format!("{}\n", "─".repeat((CELL_WIDTH + 1) * 7)));
    }

    out
}
