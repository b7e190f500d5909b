pub mod daily_log;
pub mod duty_status;
pub mod grid_point;
pub mod log_entry;
pub mod log_response;
