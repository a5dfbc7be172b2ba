use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::layout::LayoutOptions;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::ui::timeline::{render_lanes, render_layout_table};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date: day, filter } = cmd {
        let d = match day {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let (_pool, store) = open_store(cfg)?;
        let opts = LayoutOptions::from(cfg);
        let view = Core::build_day_view(&store, d, filter.as_deref(), &opts);

        header(d.format("%A, %B %-d %Y"));

        if view.events.is_empty() {
            match &view.filter {
                Some(k) => info(format!("No events matching '{k}' on {d}.")),
                None => info(format!("No events on {d}.")),
            }
            return Ok(());
        }

        print!("{}", render_layout_table(&view.events, &cfg.time_format));
        println!();
        print!(
            "{}",
            render_lanes(&view.events, &opts, cfg.timeline_rows_per_hour)
        );
    }
    Ok(())
}
