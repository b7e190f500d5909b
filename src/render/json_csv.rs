// src/render/json_csv.rs

use crate::errors::AppResult;
use crate::render::model::{EntryExport, entry_to_row, get_headers};
use crate::render::notify_export_success;
use csv::Writer;
use std::path::Path;

pub(crate) fn export_csv(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for row in rows {
        wtr.write_record(entry_to_row(row))?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}

pub(crate) fn export_json(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}
