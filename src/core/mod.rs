pub mod certification;
pub mod compliance;
pub mod grid;
pub mod logic;
pub mod summary;
