//! Quarter-hour occupancy mapper: joins duty intervals to the 96 "HH:MM"
//! cells of a day grid.

use crate::models::duty_status::DutyStatus;
use crate::models::log_entry::LogEntry;
use crate::utils::time::{MINUTES_PER_DAY, QUARTER, quarter_key};
use std::collections::BTreeMap;

/// What a populated grid cell carries: the occupying entry's status,
/// location, and id. Cells with no recorded duty status are simply absent
/// from the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOccupant {
    pub status: DutyStatus,
    pub location: Option<String>,
    pub entry_id: i64,
}

/// Build the quarter-hour occupancy map for one day of entries.
///
/// Each entry is walked from its start to its end in 15-minute steps and
/// stamped into the map under the zero-padded "HH:MM" key of each step.
/// An entry whose end precedes its start is understood to cross midnight:
/// its effective end is clamped to 24:00 and the wrapped remainder is not
/// emitted into next-day keys. Overlapping entries are not an error; later
/// entries in input order win at shared keys.
pub fn build_occupancy(entries: &[LogEntry]) -> BTreeMap<String, CellOccupant> {
    let mut cells = BTreeMap::new();

    for entry in entries {
        let start = entry.start_minutes();
        let mut end = entry.end_minutes();

        if end < start {
            // crosses midnight: clamp to end-of-day
            end = MINUTES_PER_DAY;
        }

        let mut minute = start;
        while minute < end {
            cells.insert(
                quarter_key(minute),
                CellOccupant {
                    status: entry.duty_status,
                    location: entry.location.clone(),
                    entry_id: entry.id,
                },
            );
            minute += QUARTER;
        }
    }

    cells
}
