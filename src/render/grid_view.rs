//! Terminal views of the duty grids: the 24-hour occupancy graph built
//! from entries, and the raw 11×8 matrix built from pre-binned points.

use crate::core::grid::{CellOccupant, GRID_COLUMNS, GRID_ROWS};
use crate::models::duty_status::DutyStatus;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::time::{MINUTES_PER_DAY, QUARTER, quarter_key};
use std::collections::BTreeMap;

/// Render the classic ELD graph grid: one line per duty status, one cell
/// per quarter hour, with an hour ruler on top. Cells not covered by any
/// entry stay blank ("no recorded duty status").
pub fn render_occupancy(
    occupancy: &BTreeMap<String, CellOccupant>,
    cell_char: &str,
    use_colors: bool,
) -> String {
    let mut out = String::new();

    // Hour ruler: one tick every 4 quarter cells
    out.push_str("     ");
    for hour in 0..24 {
        out.push_str(&format!("{:<4}", hour));
    }
    out.push('\n');

    for status in DutyStatus::all() {
        let color = if use_colors {
            color_for_status(status)
        } else {
            ""
        };
        let reset = if use_colors { RESET } else { "" };

        out.push_str(&format!("{:<4} ", status.label()));

        let mut minute = 0;
        while minute < MINUTES_PER_DAY {
            let key = quarter_key(minute);
            let filled = occupancy
                .get(&key)
                .is_some_and(|cell| cell.status == status);

            if filled {
                out.push_str(color);
                out.push_str(cell_char);
                out.push_str(reset);
            } else {
                out.push('·');
            }

            minute += QUARTER;
        }

        out.push('\n');
    }

    out
}

/// Render the scatter matrix as rows of symbol codes. Code 0 and anything
/// outside the known 1..4 range render as blank cells.
pub fn render_matrix(matrix: &[[u8; GRID_COLUMNS]; GRID_ROWS], use_colors: bool) -> String {
    let mut out = String::new();

    out.push_str("row  ");
    for col in 0..GRID_COLUMNS {
        out.push_str(&format!("c{:<3}", col));
    }
    out.push('\n');

    for (row_index, row) in matrix.iter().enumerate() {
        out.push_str(&format!("{:>3}  ", row_index));

        for code in row {
            match DutyStatus::from_symbol(*code) {
                Some(status) => {
                    if use_colors {
                        out.push_str(&format!(
                            "{}{:<4}{}",
                            color_for_status(status),
                            status.label(),
                            RESET
                        ));
                    } else {
                        out.push_str(&format!("{:<4}", status.label()));
                    }
                }
                None => out.push_str("·   "),
            }
        }

        out.push('\n');
    }

    out
}

/// One-line legend shown under the graphs.
pub fn legend(use_colors: bool) -> String {
    let mut parts = Vec::new();
    for status in DutyStatus::all() {
        if use_colors {
            parts.push(format!(
                "{}{}{} = {}",
                color_for_status(status),
                status.label(),
                RESET,
                status.ds_as_str()
            ));
        } else {
            parts.push(format!("{} = {}", status.label(), status.ds_as_str()));
        }
    }
    parts.join("  |  ")
}
