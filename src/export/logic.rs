// src/export/logic.rs

use crate::db::log::ttlog_quiet;
use crate::db::store::{RecordStore, SqliteStore};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every record, newest first. Returns the number written.
    pub fn export(
        store: &SqliteStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let records: Vec<RecordExport> = store
            .list_all()?
            .iter()
            .map(RecordExport::from)
            .collect();

        if records.is_empty() {
            warning("No records to export.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
        }

        ttlog_quiet(
            store.conn(),
            "export",
            file,
            &format!("Exported {} records as {}", records.len(), format.as_str()),
        );

        Ok(records.len())
    }
}
