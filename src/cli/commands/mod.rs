pub mod add;
pub mod config;
pub mod day;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod month;
pub mod move_event;
pub mod show;

use crate::config::Config;
use crate::core::store::EventStore;
use crate::db::events::load_store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database and load the event collection.
pub(crate) fn open_store(cfg: &Config) -> AppResult<(DbPool, EventStore)> {
    let pool = DbPool::new(&cfg.database)?;
    let store = load_store(&pool, &cfg.storage_key)?;
    Ok((pool, store))
}
