use crate::cli::commands::{load_response, log_file_path, require_log};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::certification::{CertificationFlow, CertificationState, CertifyBackend};
use crate::errors::{AppError, AppResult};
use crate::models::log_response::EldLogResponse;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::parse_required_date;
use std::path::PathBuf;

/// Backend seam that records the certification by stamping the daily log
/// inside the source document and writing it back to disk.
pub struct FileBackend {
    path: PathBuf,
    response: EldLogResponse,
}

impl FileBackend {
    pub fn new(path: PathBuf, response: EldLogResponse) -> Self {
        Self { path, response }
    }
}

impl CertifyBackend for FileBackend {
    fn certify(
        &mut self,
        date: &str,
        signature: Option<&str>,
        notes: Option<&str>,
    ) -> AppResult<()> {
        let log = self
            .response
            .log_for_date_mut(date)
            .ok_or_else(|| AppError::Certification(format!("no daily log for {date}")))?;

        if log.certified {
            return Err(AppError::Certification(format!(
                "log for {date} is already certified"
            )));
        }

        log.certified = true;
        log.certified_at = Some(chrono::Local::now().to_rfc3339());
        log.signature = signature.map(str::to_string);
        log.notes = notes.map(str::to_string);

        self.response.save(&self.path)
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Certify {
        date,
        acknowledge,
        signature,
        notes,
    } = cmd
    {
        parse_required_date(date)?;

        let response = load_response(cfg)?;
        let log = require_log(&response, date)?;

        let mut flow = CertificationFlow::for_log(log);

        // Terminal state: the acknowledgment form is never shown again.
        if !flow.form_available() {
            info(format!(
                "Log for {} is already certified{}.",
                date,
                log.certified_at
                    .as_deref()
                    .map(|ts| format!(" ({ts})"))
                    .unwrap_or_default()
            ));
            return Ok(());
        }

        if !flow.begin(*acknowledge) {
            warning(
                "Certification requires --acknowledge: \
                 you must attest that the record is true and accurate.",
            );
            return Ok(());
        }

        let mut backend = FileBackend::new(log_file_path(cfg), response.clone());
        let state = flow.submit(&mut backend, signature.as_deref(), notes.as_deref());

        match state {
            CertificationState::Certified => {
                success(format!("Log for {} certified.", date));
            }
            _ => {
                warning(format!(
                    "Certification for {} was not recorded; you may retry.",
                    date
                ));
            }
        }
    }
    Ok(())
}
