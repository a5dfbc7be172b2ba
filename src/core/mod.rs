//! Business logic: the event store, the timeline layout engine, the
//! reschedule flow and the per-command operations built on them.

pub mod add;
pub mod calculator;
pub mod config;
pub mod del;
pub mod edit;
pub mod log;
pub mod logic;
pub mod reschedule;
pub mod store;

use crate::config::Config;
use crate::db::events::save_store;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use store::EventStore;

/// Write the whole collection back to its slot and record the mutation in
/// the internal log. Must follow every store mutation.
pub(crate) fn commit(
    pool: &DbPool,
    cfg: &Config,
    store: &EventStore,
    operation: &str,
    target: &str,
    message: &str,
) -> AppResult<()> {
    save_store(pool, &cfg.storage_key, store)?;
    ttlog(&pool.conn, operation, target, message)
}
