pub mod occupancy;
pub mod scatter;

pub use occupancy::{CellOccupant, build_occupancy};
pub use scatter::{GRID_COLUMNS, GRID_ROWS, scatter};
