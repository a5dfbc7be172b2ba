use crate::config::Config;
use crate::core::commit;
use crate::db::events::load_store;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove an event. Reports `EventNotFound` for unknown ids so the CLI
    /// can tell the user; the store itself treats that case as a no-op.
    pub fn apply(pool: &mut DbPool, cfg: &Config, id: &str) -> AppResult<Event> {
        let mut store = load_store(pool, &cfg.storage_key)?;

        let removed = store
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::EventNotFound(id.to_string()))?;

        store.delete(id);

        commit(
            pool,
            cfg,
            &store,
            "del",
            id,
            &format!("Deleted '{}' ({})", removed.name, removed.day()),
        )?;

        info(format!("Deleted event #{} '{}'", id, removed.name));
        Ok(removed)
    }
}
