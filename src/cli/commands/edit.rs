use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EventChanges};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_datetime;
use chrono::NaiveDateTime;

fn parse_optional_datetime(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    input
        .map(|s| parse_datetime(s).ok_or_else(|| AppError::InvalidDate(s.to_string())))
        .transpose()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        start,
        end,
        description,
        kind,
    } = cmd
    {
        let changes = EventChanges {
            name: name.clone(),
            start_time: parse_optional_datetime(start.as_ref())?,
            end_time: parse_optional_datetime(end.as_ref())?,
            description: description.clone(),
            kind: *kind,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        EditLogic::apply(&mut pool, cfg, id, &changes)?;
    }

    Ok(())
}
