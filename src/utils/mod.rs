pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

// Re-export of the most used formatting helpers
pub use formatting::mins2readable;
pub use formatting::percent_of;
