use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reschedule::RescheduleLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::drop_outcome::DropOutcome;
use crate::utils::time::parse_optional_time;

/// `move` is the terminal counterpart of dragging an event onto another
/// day and confirming the proposed times.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Move {
        id,
        target,
        start,
        end,
        column,
    } = cmd
    {
        let outcome = DropOutcome::from_payload(id, Some(target), *column)?;
        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;

        let mut pool = DbPool::new(&cfg.database)?;
        RescheduleLogic::apply(&mut pool, cfg, outcome, start, end)?;
    }

    Ok(())
}
