// src/render/model.rs

use crate::models::daily_log::DailyLog;
use serde::Serialize;

/// Flat row shape for entry export.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub driver: String,
    pub start_time: String,
    pub end_time: String,
    pub duty_status: String,
    pub location: String,
    pub certified: bool,
}

/// Header per CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "driver",
        "start_time",
        "end_time",
        "duty_status",
        "location",
        "certified",
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.date.clone(),
        e.driver.clone(),
        e.start_time.clone(),
        e.end_time.clone(),
        e.duty_status.clone(),
        e.location.clone(),
        e.certified.to_string(),
    ]
}

/// Flatten the per-day entry lists into export rows.
pub fn flatten_logs(logs: &[DailyLog]) -> Vec<EntryExport> {
    let mut rows = Vec::new();

    for log in logs {
        for entry in &log.entries {
            rows.push(EntryExport {
                id: entry.id,
                date: log.date.clone(),
                driver: log.driver.clone(),
                start_time: entry.start_time.clone(),
                end_time: entry.end_time.clone(),
                duty_status: entry.duty_status.ds_as_str().to_string(),
                location: entry.location.clone().unwrap_or_default(),
                certified: log.certified,
            });
        }
    }

    rows
}
