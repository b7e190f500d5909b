/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

use crate::core::compliance::ComplianceStatus;
use crate::models::duty_status::DutyStatus;

/// Grid row / legend color per duty status
pub fn color_for_status(status: DutyStatus) -> &'static str {
    match status {
        DutyStatus::OffDuty => GREY,
        DutyStatus::SleeperBerth => BLUE,
        DutyStatus::Driving => GREEN,
        DutyStatus::OnDutyNotDriving => YELLOW,
    }
}

/// Compliance status color:
/// compliant → green
/// violation → red
/// warning → yellow
pub fn color_for_compliance(status: ComplianceStatus) -> &'static str {
    match status {
        ComplianceStatus::Compliant => GREEN,
        ComplianceStatus::Violation => RED,
        ComplianceStatus::Warning => YELLOW,
    }
}

/// Grey out empty/placeholder values, leave the rest untouched.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "--:--" || v == "00h 00m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
