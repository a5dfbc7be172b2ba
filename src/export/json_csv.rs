// src/export/json_csv.rs

use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::export::model::{CSV_HEADERS, EventExport};

/// Full JSON dump of the collection, readable back with
/// `EventStore::from_json`.
pub fn render_json(store: &EventStore) -> AppResult<String> {
    store.to_json_pretty()
}

/// CSV with a header row and one row per event.
///
/// With `quoted == true` fields are quoted as needed (RFC 4180). Otherwise
/// cells are joined with bare commas, so a comma inside a name or a
/// description shifts the remaining columns of that row.
pub fn render_csv(rows: &[EventExport], quoted: bool) -> AppResult<String> {
    if !quoted {
        let mut out = CSV_HEADERS.join(",");
        for row in rows {
            out.push('\n');
            out.push_str(&row.to_row().join(","));
        }
        return Ok(out);
    }

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(CSV_HEADERS)?;
    for row in rows {
        wtr.write_record(row.to_row())?;
    }
    wtr.flush()?;

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV buffer error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
