// src/render/logic.rs

use crate::errors::{AppError, AppResult};
use crate::models::log_response::EldLogResponse;
use crate::render::ExportFormat;
use crate::render::fs_utils::ensure_writable;
use crate::render::json_csv::{export_csv, export_json};
use crate::render::model::flatten_logs;
use crate::render::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// High-level export orchestration.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the daily-log entries of the loaded document.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute path of the output file
    /// - `date`: optional `YYYY-MM-DD` filter (single day)
    pub fn export(
        response: &EldLogResponse,
        format: ExportFormat,
        file: &str,
        date: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let logs: Vec<_> = match date {
            None => response.logs.clone(),
            Some(d) => response
                .logs
                .iter()
                .filter(|l| &l.date == d)
                .cloned()
                .collect(),
        };

        let rows = flatten_logs(&logs);

        if rows.is_empty() {
            warning("⚠️  No entries found for selected date.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }
}
