//! Row/column grid scatter: places pre-binned duty-status samples into the
//! fixed virtual-day matrix.

use crate::models::grid_point::GridPoint;

pub const GRID_ROWS: usize = 11;
pub const GRID_COLUMNS: usize = 8;

/// Scatter points into an 11×8 matrix of symbol codes (0 = no data).
///
/// Points outside the matrix bounds are dropped without error. Later points
/// at the same cell overwrite earlier ones. Symbol codes are carried through
/// uninterpreted; codes outside 0..=4 render as blank downstream.
pub fn scatter(points: &[GridPoint]) -> [[u8; GRID_COLUMNS]; GRID_ROWS] {
    let mut matrix = [[0u8; GRID_COLUMNS]; GRID_ROWS];

    for point in points {
        let row = point.grid_row;
        let col = point.grid_column;

        if row < 0 || row >= GRID_ROWS as i32 || col < 0 || col >= GRID_COLUMNS as i32 {
            continue;
        }

        matrix[row as usize][col as usize] = point.duty_status_symbol;
    }

    matrix
}
