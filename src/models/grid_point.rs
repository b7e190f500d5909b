use serde::{Deserialize, Serialize};

/// A pre-binned duty-status sample produced by the backend: a cell in the
/// 11-row × 8-column virtual day grid. Coordinates are kept signed and
/// unchecked here; bounds are applied when the points are scattered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridPoint {
    pub grid_row: i32,
    pub grid_column: i32,
    pub duty_status_symbol: u8,
}

impl GridPoint {
    pub fn new(grid_row: i32, grid_column: i32, duty_status_symbol: u8) -> Self {
        Self {
            grid_row,
            grid_column,
            duty_status_symbol,
        }
    }
}
