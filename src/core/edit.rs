use crate::config::Config;
use crate::core::commit;
use crate::db::events::load_store;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::ui::messages::success;
use chrono::NaiveDateTime;

/// Field changes requested by `edit`. `None` keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct EventChanges {
    pub name: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    /// `Some("")` clears the description.
    pub description: Option<String>,
    pub kind: Option<EventType>,
}

impl EventChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.description.is_none()
            && self.kind.is_none()
    }

    /// The edited copy of `current`.
    pub fn apply_to(&self, current: &Event) -> Event {
        let description = match &self.description {
            Some(d) if d.is_empty() => None,
            Some(d) => Some(d.clone()),
            None => current.description.clone(),
        };

        Event {
            id: current.id.clone(),
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            start_time: self.start_time.unwrap_or(current.start_time),
            end_time: self.end_time.unwrap_or(current.end_time),
            description,
            kind: self.kind.or(current.kind),
        }
    }
}

/// High-level business logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        id: &str,
        changes: &EventChanges,
    ) -> AppResult<Event> {
        if changes.is_empty() {
            return Err(AppError::Other(
                "Nothing to do: specify at least one field to change.".into(),
            ));
        }

        let mut store = load_store(pool, &cfg.storage_key)?;

        let current = store
            .get(id)
            .ok_or_else(|| AppError::EventNotFound(id.to_string()))?;
        let edited = changes.apply_to(current);

        let updated = store
            .update(id, edited)
            .ok_or_else(|| AppError::EventNotFound(id.to_string()))?;

        commit(
            pool,
            cfg,
            &store,
            "edit",
            id,
            &format!("Updated '{}'", updated.name),
        )?;

        success(format!("✏️ Event #{} updated.", id));
        Ok(updated)
    }
}
