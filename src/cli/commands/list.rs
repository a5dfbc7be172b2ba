use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};

const TEXT_WIDTH: usize = 32;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { day, search } = cmd {
        let (_pool, store) = open_store(cfg)?;

        let mut events = match day {
            Some(d) => {
                let d = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
                store.events_on_day(d)
            }
            None => store.events().to_vec(),
        };

        if let Some(keyword) = search {
            events.retain(|e| e.matches(keyword));
        }

        if events.is_empty() {
            info("No events found.");
            return Ok(());
        }

        events.sort_by_key(|e| e.start_time);
        print_events(&events, cfg);
    }
    Ok(())
}

fn print_events(events: &[Event], cfg: &Config) {
    let mut table = Table::new(vec![
        Column::new("ID", 2),
        Column::new("Date", 4),
        Column::new("Time", 4),
        Column::new("Type", 4),
        Column::new("Name", 4),
        Column::new("Description", 11),
    ]);

    for ev in events {
        table.add_row(vec![
            ev.id.clone(),
            ev.day().format(&cfg.date_format).to_string(),
            ev.time_range_str(&cfg.time_format),
            ev.kind_str().to_string(),
            truncate(&ev.name, TEXT_WIDTH),
            truncate(ev.description.as_deref().unwrap_or(""), TEXT_WIDTH),
        ]);
    }

    table.fit();
    print!("{}", table.render());
    println!("{} event(s)", events.len());
}
