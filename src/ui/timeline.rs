//! Textual day timeline: a coordinates table plus a lane drawing where
//! each event occupies the rows of its time range and the horizontal slice
//! given by its left/width fractions.

use crate::core::calculator::layout::LayoutOptions;
use crate::models::event_type::token_colour;
use crate::models::positioned_event::PositionedEvent;
use crate::utils::formatting::{percent, truncate};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;

/// Characters available for the event area of a lane row.
pub const LANE_WIDTH: usize = 60;

const NAME_WIDTH: usize = 28;

/// Single-letter label of the n-th positioned event.
pub fn label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

pub fn render_layout_table(items: &[PositionedEvent], time_format: &str) -> String {
    let mut table = Table::new(vec![
        Column::new("", 1),
        Column::new("ID", 2),
        Column::new("Time", 5),
        Column::new("Name", 4),
        Column::new("Type", 4),
        Column::new("Col", 3),
        Column::new("Live", 4),
        Column::new("Left", 4),
        Column::new("Width", 5),
        Column::new("Top", 3),
        Column::new("Height", 6),
    ]);

    for (i, p) in items.iter().enumerate() {
        table.add_row(vec![
            label(i).to_string(),
            p.event.id.clone(),
            p.event.time_range_str(time_format),
            truncate(&p.event.name, NAME_WIDTH),
            p.event.kind_str().to_string(),
            p.column.to_string(),
            p.overlap_count.to_string(),
            percent(p.left_fraction),
            percent(p.width_fraction),
            format!("{:.1}", p.top_offset),
            format!("{:.1}", p.height),
        ]);
    }

    table.fit();
    table.render()
}

fn covers_row(p: &PositionedEvent, row_top: f64, row_bottom: f64) -> bool {
    if p.height > 0.0 {
        p.top_offset < row_bottom && p.top_offset + p.height > row_top
    } else {
        p.top_offset >= row_top && p.top_offset < row_bottom
    }
}

fn horizontal_span(p: &PositionedEvent) -> (usize, usize) {
    let x0 = (p.left_fraction * LANE_WIDTH as f64).round() as usize;
    let x1 = ((p.left_fraction + p.width_fraction) * LANE_WIDTH as f64).round() as usize;
    let x0 = x0.min(LANE_WIDTH - 1);
    (x0, x1.clamp(x0 + 1, LANE_WIDTH))
}

/// Draw the rows between the earliest start and the latest end.
pub fn render_lanes(items: &[PositionedEvent], opts: &LayoutOptions, rows_per_hour: u32) -> String {
    if items.is_empty() {
        return String::new();
    }

    let minutes_per_row = 60 / rows_per_hour.max(1) as i64;
    let units_per_row = opts.pixels_per_minute * minutes_per_row as f64;
    let total_rows = 24 * rows_per_hour.max(1) as i64;

    let first_row = items
        .iter()
        .map(|p| (p.top_offset / units_per_row).floor() as i64)
        .min()
        .unwrap_or(0)
        .clamp(0, total_rows - 1);
    let last_row = items
        .iter()
        .map(|p| ((p.top_offset + p.height) / units_per_row).ceil() as i64)
        .max()
        .unwrap_or(0)
        .clamp(first_row + 1, total_rows);

    let mut out = String::new();

    for row in first_row..last_row {
        let row_top = row as f64 * units_per_row;
        let row_bottom = row_top + units_per_row;

        let mut cells: Vec<Option<usize>> = vec![None; LANE_WIDTH];
        for (i, p) in items.iter().enumerate() {
            if !covers_row(p, row_top, row_bottom) {
                continue;
            }
            let (x0, x1) = horizontal_span(p);
            for cell in cells.iter_mut().take(x1).skip(x0) {
                *cell = Some(i);
            }
        }

        out.push_str(&format_minutes(row * minutes_per_row));
        out.push_str(" │");
        for cell in cells {
            match cell {
                Some(i) => {
                    let colour = token_colour(items[i].event.color_token());
                    out.push_str(&colour.paint(label(i).to_string()).to_string());
                }
                None => out.push(' '),
            }
        }
        out.push_str("│\n");
    }

    out
}
