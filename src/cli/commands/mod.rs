pub mod certify;
pub mod compliance;
pub mod config;
pub mod export;
pub mod grid;
pub mod init;
pub mod list;
pub mod summary;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::log_response::EldLogResponse;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Resolve the backend document path: CLI override first, config second.
pub(crate) fn log_file_path(cfg: &Config) -> PathBuf {
    expand_tilde(&cfg.log_file)
}

/// Load the backend document and surface its error string, if any.
/// The backend-supplied message is rendered as-is.
pub(crate) fn load_response(cfg: &Config) -> AppResult<EldLogResponse> {
    let path = log_file_path(cfg);
    let response = EldLogResponse::load(&path)?;

    if let Some(err) = &response.error {
        warning(format!("Backend error: {}", err));
    }

    Ok(response)
}

/// Find the daily log for a date or fail with a domain error.
pub(crate) fn require_log<'a>(
    response: &'a EldLogResponse,
    date: &str,
) -> AppResult<&'a crate::models::daily_log::DailyLog> {
    response
        .log_for_date(date)
        .ok_or_else(|| AppError::NoLogForDate(date.to_string()))
}
