use super::duty_status::DutyStatus;
use crate::utils::time::parse_minutes_or_zero;
use serde::{Deserialize, Serialize};

/// One contiguous period of a driver's duty status within a calendar day.
/// Times are the backend's "HH:MM" strings; an end before the start means
/// the period crosses midnight. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub start_time: String, // ⇔ "HH:MM"
    pub end_time: String,   // ⇔ "HH:MM"
    pub duty_status: DutyStatus,
    #[serde(default)]
    pub location: Option<String>,
}

impl LogEntry {
    pub fn new(
        id: i64,
        start_time: &str,
        end_time: &str,
        duty_status: DutyStatus,
        location: Option<&str>,
    ) -> Self {
        Self {
            id,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            duty_status,
            location: location.map(str::to_string),
        }
    }

    /// Start as minutes since midnight (malformed times count as 00:00)
    pub fn start_minutes(&self) -> i64 {
        parse_minutes_or_zero(&self.start_time)
    }

    /// End as minutes since midnight (malformed times count as 00:00)
    pub fn end_minutes(&self) -> i64 {
        parse_minutes_or_zero(&self.end_time)
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end_minutes() < self.start_minutes()
    }

    /// Duration in minutes, with the midnight-crossing tail clamped to 24:00.
    /// The wrapped remainder past midnight is not counted.
    pub fn clamped_duration_minutes(&self) -> i64 {
        let start = self.start_minutes();
        let end = if self.crosses_midnight() {
            24 * 60
        } else {
            self.end_minutes()
        };
        (end - start).max(0)
    }
}
