// src/export/logic.rs

use crate::config::Config;
use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{render_csv, render_json};
use crate::export::model::EventExport;
use crate::export::notify_export_success;
use crate::ui::messages::{info, warning};
use std::fs;
use std::path::Path;

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the whole collection.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        store: &EventStore,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        if store.is_empty() {
            warning("No events to export, writing an empty document.");
        }

        info(format!(
            "Exporting {} event(s) to {}: {}",
            store.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        let content = Self::render(store, cfg, format)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }

    /// Produce the export document in memory.
    pub fn render(store: &EventStore, cfg: &Config, format: ExportFormat) -> AppResult<String> {
        match format {
            ExportFormat::Json => render_json(store),
            ExportFormat::Csv => {
                let rows: Vec<EventExport> = store
                    .events()
                    .iter()
                    .map(|e| EventExport::from_event(e, &cfg.date_format, &cfg.time_format))
                    .collect();
                render_csv(&rows, cfg.csv_quoting)
            }
        }
    }
}
