//! Load and save the event collection through its durable slot.

use crate::core::store::EventStore;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::slot::{read_slot, write_slot};
use crate::errors::AppResult;

/// Load the whole collection from `key`.
///
/// A missing slot, or one whose content does not parse, yields an empty
/// store. The recovery is noted in the internal log only.
pub fn load_store(pool: &DbPool, key: &str) -> AppResult<EventStore> {
    let Some(text) = read_slot(&pool.conn, key)? else {
        return Ok(EventStore::new());
    };

    match EventStore::from_json(&text) {
        Ok(store) => Ok(store),
        Err(e) => {
            ttlog(
                &pool.conn,
                "recover",
                key,
                &format!("Discarded unreadable slot content: {e}"),
            )?;
            Ok(EventStore::new())
        }
    }
}

/// Overwrite `key` with the full collection.
pub fn save_store(pool: &DbPool, key: &str, store: &EventStore) -> AppResult<()> {
    write_slot(&pool.conn, key, &store.to_json()?)
}
