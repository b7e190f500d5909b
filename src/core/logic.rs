use crate::core::grid::{CellOccupant, build_occupancy};
use crate::core::summary::DutyTotals;
use crate::models::daily_log::DailyLog;
use std::collections::BTreeMap;

/// Everything the day views need, computed in one pass from a daily log.
#[derive(Debug, Default)]
pub struct DayView {
    pub occupancy: BTreeMap<String, CellOccupant>,
    pub totals: DutyTotals,
    pub entry_count: usize,
}

pub struct Core;

impl Core {
    pub fn build_day_view(log: &DailyLog) -> DayView {
        DayView {
            occupancy: build_occupancy(&log.entries),
            totals: DutyTotals::from_entries(&log.entries),
            entry_count: log.entries.len(),
        }
    }
}
