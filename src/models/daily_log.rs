use super::{grid_point::GridPoint, log_entry::LogEntry};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of a driver's ELD record as delivered by the backend.
/// Read-only in this layer; certification is the only write, and it goes
/// back through the backend seam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: String, // ⇔ "YYYY-MM-DD"
    pub driver: String,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default)]
    pub entries: Vec<LogEntry>,
    #[serde(default)]
    pub grid_points: Vec<GridPoint>,
    #[serde(default)]
    pub certified: bool,
    #[serde(default)]
    pub certified_at: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DailyLog {
    pub fn parsed_date(&self) -> AppResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(self.date.clone()))
    }
}
