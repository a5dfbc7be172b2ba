use crate::config::Config;
use crate::core::commit;
use crate::db::events::load_store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event::{Event, EventDraft};
use crate::ui::messages::{success, warning};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(pool: &mut DbPool, cfg: &Config, draft: EventDraft) -> AppResult<Event> {
        let mut store = load_store(pool, &cfg.storage_key)?;

        if draft.end_time <= draft.start_time {
            warning("End time is not after start time; the event will show with minimal height.");
        }

        let event = store.create(draft);

        commit(
            pool,
            cfg,
            &store,
            "add",
            &event.id,
            &format!(
                "Added '{}' on {} ({})",
                event.name,
                event.day(),
                event.time_range_str(&cfg.time_format)
            ),
        )?;

        success(format!(
            "Added event #{} '{}' on {} ({}).",
            event.id,
            event.name,
            event.day().format(&cfg.date_format),
            event.time_range_str(&cfg.time_format)
        ));

        Ok(event)
    }
}
