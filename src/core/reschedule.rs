//! Drag-to-reschedule confirmation flow.
//!
//! `Idle -> PendingConfirmation -> Idle`. A drop onto a day captures the
//! dragged event and the target day; the user then confirms (possibly
//! adjusted) clock times or cancels.

use crate::config::Config;
use crate::core::commit;
use crate::core::store::EventStore;
use crate::db::events::load_store;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::drop_outcome::DropOutcome;
use crate::models::event::Event;
use crate::ui::messages::{info, success};
use crate::utils::time::whole_minute;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Proposed move awaiting the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReschedule {
    pub event: Event,
    pub target_date: NaiveDate,
    pub target_column_index: Option<usize>,
    /// Editable clock times, pre-filled from the event's original times
    /// with seconds dropped.
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl PendingReschedule {
    pub fn new_start(&self) -> NaiveDateTime {
        self.target_date.and_time(self.start)
    }

    pub fn new_end(&self) -> NaiveDateTime {
        self.target_date.and_time(self.end)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RescheduleFlow {
    #[default]
    Idle,
    PendingConfirmation(PendingReschedule),
}

impl RescheduleFlow {
    pub fn new() -> Self {
        Self::Idle
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, RescheduleFlow::Idle)
    }

    pub fn pending(&self) -> Option<&PendingReschedule> {
        match self {
            RescheduleFlow::PendingConfirmation(p) => Some(p),
            RescheduleFlow::Idle => None,
        }
    }

    /// Handle the end of a drag gesture.
    ///
    /// Returns `true` when the flow moved to `PendingConfirmation`. An
    /// aborted drag (`None`) or a drop of an unknown event leaves the
    /// flow unchanged. A new drop replaces any pending one.
    pub fn handle_drop(&mut self, outcome: Option<DropOutcome>, store: &EventStore) -> bool {
        let Some(outcome) = outcome else {
            return false;
        };

        let Some(event) = store.get(&outcome.source_event_id) else {
            return false;
        };

        *self = RescheduleFlow::PendingConfirmation(PendingReschedule {
            start: whole_minute(event.start_time.time()),
            end: whole_minute(event.end_time.time()),
            event: event.clone(),
            target_date: outcome.target_date,
            target_column_index: outcome.target_column_index,
        });
        true
    }

    /// Adjust the proposed clock times. Ignored while idle.
    pub fn set_times(&mut self, start: Option<NaiveTime>, end: Option<NaiveTime>) {
        if let RescheduleFlow::PendingConfirmation(p) = self {
            if let Some(s) = start {
                p.start = s;
            }
            if let Some(e) = end {
                p.end = e;
            }
        }
    }

    /// Apply the pending move to the store and return to `Idle`.
    ///
    /// Returns the rescheduled event, or `None` if nothing was pending or
    /// the event disappeared from the store meanwhile.
    pub fn confirm(&mut self, store: &mut EventStore) -> Option<Event> {
        match std::mem::take(self) {
            RescheduleFlow::PendingConfirmation(p) => {
                store.reschedule(&p.event.id, p.new_start(), p.new_end())
            }
            RescheduleFlow::Idle => None,
        }
    }

    /// Discard the pending move without touching the store.
    pub fn cancel(&mut self) {
        *self = RescheduleFlow::Idle;
    }
}

/// High-level business logic for the `move` command: one drag gesture
/// followed by its confirmation, persisted.
pub struct RescheduleLogic;

impl RescheduleLogic {
    /// Drop the event described by `outcome`, optionally override the
    /// pre-filled clock times, confirm and save.
    ///
    /// `Ok(None)` means the drop had no destination and nothing changed.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        outcome: Option<DropOutcome>,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
    ) -> AppResult<Option<Event>> {
        let Some(outcome) = outcome else {
            info("Drag aborted: no destination, nothing to reschedule.");
            return Ok(None);
        };

        let mut store = load_store(pool, &cfg.storage_key)?;
        let mut flow = RescheduleFlow::new();

        let source_id = outcome.source_event_id.clone();
        if !flow.handle_drop(Some(outcome), &store) {
            return Err(AppError::EventNotFound(source_id));
        }

        flow.set_times(start, end);

        let (from, to) = match flow.pending() {
            Some(p) => (p.event.start_time, p.new_start()),
            None => return Ok(None),
        };

        let Some(moved) = flow.confirm(&mut store) else {
            return Err(AppError::EventNotFound(source_id));
        };

        commit(
            pool,
            cfg,
            &store,
            "move",
            &moved.id,
            &format!(
                "Rescheduled '{}' from {} to {}",
                moved.name,
                from.format("%Y-%m-%d %H:%M"),
                to.format("%Y-%m-%d %H:%M")
            ),
        )?;

        success(format!(
            "Moved event #{} to {} ({}).",
            moved.id,
            moved.day().format(&cfg.date_format),
            moved.time_range_str(&cfg.time_format)
        ));

        Ok(Some(moved))
    }
}
