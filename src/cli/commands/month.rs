use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::month::{month_cells, render_month};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month { month } = cmd {
        let today = date::today();
        let first = match month {
            Some(m) => date::parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?,
            None => date::first_of_month(today),
        };

        let (_pool, store) = open_store(cfg)?;
        let cells = month_cells(&store, first, today);
        print!("{}", render_month(&cells, first));
    }
    Ok(())
}
