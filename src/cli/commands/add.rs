use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventDraft;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Add an event to a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        name,
        start,
        end,
        description,
        kind,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Clock times, falling back to the configured defaults
        //
        let (default_start, default_end) = cfg.default_times()?;
        let start_time = parse_optional_time(start.as_ref())?.unwrap_or(default_start);
        let end_time = parse_optional_time(end.as_ref())?.unwrap_or(default_end);

        //
        // 3. Build the draft
        //
        let mut draft = EventDraft::new(name, d.and_time(start_time), d.and_time(end_time))
            .with_kind(kind.unwrap_or(cfg.default_event_type));
        if let Some(desc) = description.as_deref().filter(|s| !s.is_empty()) {
            draft = draft.with_description(desc);
        }

        //
        // 4. Execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;
        AddLogic::apply(&mut pool, cfg, draft)?;
    }

    Ok(())
}
