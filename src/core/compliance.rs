//! HOS compliance grading: three-state classification plus the fixed
//! letter-grade bands applied to the backend's compliance score.

use crate::models::log_response::ComplianceSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceStatus {
    Compliant,
    Violation,
    Warning,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Violation => "violation",
            ComplianceStatus::Warning => "warning",
        }
    }
}

/// Classify a compliance roll-up. Recorded violations always take
/// precedence over the backend's `is_compliant` flag.
pub fn classify(violation_count: u32, is_compliant: bool) -> ComplianceStatus {
    if violation_count > 0 {
        ComplianceStatus::Violation
    } else if is_compliant {
        ComplianceStatus::Compliant
    } else {
        ComplianceStatus::Warning
    }
}

/// Letter grade for a compliance score. Callers hand in a finite value
/// (the lenient deserializer already collapsed garbage to 0.0).
pub fn letter_grade(score: f64) -> &'static str {
    let score = if score.is_finite() { score } else { 0.0 };

    if score >= 95.0 {
        "A+"
    } else if score >= 90.0 {
        "A"
    } else if score >= 85.0 {
        "B+"
    } else if score >= 80.0 {
        "B"
    } else if score >= 75.0 {
        "C+"
    } else if score >= 70.0 {
        "C"
    } else if score >= 65.0 {
        "D"
    } else {
        "F"
    }
}

/// Grade + status for one roll-up, as shown by the compliance command.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceReport {
    pub score: f64,
    pub grade: &'static str,
    pub status: ComplianceStatus,
}

pub fn report(summary: &ComplianceSummary) -> ComplianceReport {
    ComplianceReport {
        score: summary.score,
        grade: letter_grade(summary.score),
        status: classify(summary.violation_count, summary.is_compliant),
    }
}
