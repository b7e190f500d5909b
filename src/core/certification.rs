//! Driver certification workflow for a daily log.
//!
//! States move Uncertified → Certifying → Certified, or back to
//! Uncertified when the backend rejects the submission. A log that arrives
//! already certified enters the terminal state directly and the
//! acknowledgment form flow is never offered for it again.

use crate::errors::AppResult;
use crate::models::daily_log::DailyLog;
use crate::ui::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificationState {
    Uncertified,
    Certifying,
    Certified,
}

/// Seam to whatever actually records the certification. The original
/// surface awaits a single asynchronous completion; here it is one
/// blocking call with the same contract: Ok commits, Err rejects.
pub trait CertifyBackend {
    fn certify(
        &mut self,
        date: &str,
        signature: Option<&str>,
        notes: Option<&str>,
    ) -> AppResult<()>;
}

#[derive(Debug)]
pub struct CertificationFlow {
    state: CertificationState,
    date: String,
}

impl CertificationFlow {
    /// Start the flow for one daily log. Already-certified logs are
    /// terminal from the outset.
    pub fn for_log(log: &DailyLog) -> Self {
        let state = if log.certified {
            CertificationState::Certified
        } else {
            CertificationState::Uncertified
        };
        Self {
            state,
            date: log.date.clone(),
        }
    }

    pub fn state(&self) -> CertificationState {
        self.state
    }

    /// Whether the acknowledgment/signature form applies at all.
    /// Terminal logs never show it again.
    pub fn form_available(&self) -> bool {
        self.state == CertificationState::Uncertified
    }

    /// Enter the Certifying state. A no-op (returns false) unless the
    /// driver explicitly acknowledged the accuracy statement and the log
    /// is still uncertified.
    pub fn begin(&mut self, acknowledged: bool) -> bool {
        if !acknowledged || self.state != CertificationState::Uncertified {
            return false;
        }
        self.state = CertificationState::Certifying;
        true
    }

    /// Submit the certification through the backend seam.
    ///
    /// On success the flow reaches the terminal Certified state. On
    /// failure the error is written to the diagnostic channel and the
    /// state reverts to Uncertified so the driver may try again later;
    /// there is no automatic retry.
    pub fn submit(
        &mut self,
        backend: &mut dyn CertifyBackend,
        signature: Option<&str>,
        notes: Option<&str>,
    ) -> CertificationState {
        if self.state != CertificationState::Certifying {
            return self.state;
        }

        match backend.certify(&self.date, signature, notes) {
            Ok(()) => {
                self.state = CertificationState::Certified;
            }
            Err(e) => {
                messages::diagnostic(format!("certification failed for {}: {}", self.date, e));
                self.state = CertificationState::Uncertified;
            }
        }

        self.state
    }
}
