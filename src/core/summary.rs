//! Duty-hour aggregation: minutes per duty status over one day, with
//! percentage-of-day helpers for the summary views.

use crate::models::duty_status::DutyStatus;
use crate::models::log_entry::LogEntry;
use crate::utils::formatting::percent_of;
use crate::utils::time::MINUTES_PER_DAY;

#[derive(Debug, Default, Clone)]
pub struct DutyTotals {
    pub off_duty_minutes: i64,
    pub sleeper_berth_minutes: i64,
    pub driving_minutes: i64,
    pub on_duty_minutes: i64,
}

impl DutyTotals {
    /// Aggregate the entries of one day. Midnight-crossing entries count
    /// only up to 24:00, mirroring the grid occupancy clamp.
    pub fn from_entries(entries: &[LogEntry]) -> Self {
        let mut totals = DutyTotals::default();

        for entry in entries {
            let minutes = entry.clamped_duration_minutes();
            match entry.duty_status {
                DutyStatus::OffDuty => totals.off_duty_minutes += minutes,
                DutyStatus::SleeperBerth => totals.sleeper_berth_minutes += minutes,
                DutyStatus::Driving => totals.driving_minutes += minutes,
                DutyStatus::OnDutyNotDriving => totals.on_duty_minutes += minutes,
            }
        }

        totals
    }

    pub fn minutes_for(&self, status: DutyStatus) -> i64 {
        match status {
            DutyStatus::OffDuty => self.off_duty_minutes,
            DutyStatus::SleeperBerth => self.sleeper_berth_minutes,
            DutyStatus::Driving => self.driving_minutes,
            DutyStatus::OnDutyNotDriving => self.on_duty_minutes,
        }
    }

    pub fn recorded_minutes(&self) -> i64 {
        self.off_duty_minutes
            + self.sleeper_berth_minutes
            + self.driving_minutes
            + self.on_duty_minutes
    }

    /// Share of the 24-hour day spent in `status` (zero-safe)
    pub fn percent_of_day(&self, status: DutyStatus) -> f64 {
        percent_of(self.minutes_for(status), MINUTES_PER_DAY)
    }

    /// Share of the recorded time spent in `status` (zero-safe)
    pub fn percent_of_recorded(&self, status: DutyStatus) -> f64 {
        percent_of(self.minutes_for(status), self.recorded_minutes())
    }
}
