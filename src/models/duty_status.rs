use serde::{Deserialize, Serialize};

/// The four regulatory duty statuses of an ELD record.
/// Symbol codes 1..4 follow the grid convention; 0 means "no data".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDutyNotDriving,
}

impl DutyStatus {
    pub fn ds_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "off_duty" => Some(Self::OffDuty),
            "sleeper_berth" => Some(Self::SleeperBerth),
            "driving" => Some(Self::Driving),
            "on_duty_not_driving" => Some(Self::OnDutyNotDriving),
            _ => None,
        }
    }

    pub fn ds_as_str(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "off_duty",
            DutyStatus::SleeperBerth => "sleeper_berth",
            DutyStatus::Driving => "driving",
            DutyStatus::OnDutyNotDriving => "on_duty_not_driving",
        }
    }

    /// Short label for grid rulers and table headers
    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF",
            DutyStatus::SleeperBerth => "SB",
            DutyStatus::Driving => "D",
            DutyStatus::OnDutyNotDriving => "ON",
        }
    }

    /// Convert enum → grid symbol code (1..4)
    pub fn symbol(&self) -> u8 {
        match self {
            DutyStatus::OffDuty => 1,
            DutyStatus::SleeperBerth => 2,
            DutyStatus::Driving => 3,
            DutyStatus::OnDutyNotDriving => 4,
        }
    }

    /// Convert grid symbol code → enum (0 and unknown codes carry no status)
    pub fn from_symbol(code: u8) -> Option<Self> {
        match code {
            1 => Some(DutyStatus::OffDuty),
            2 => Some(DutyStatus::SleeperBerth),
            3 => Some(DutyStatus::Driving),
            4 => Some(DutyStatus::OnDutyNotDriving),
            _ => None,
        }
    }

    pub fn is_driving(&self) -> bool {
        matches!(self, DutyStatus::Driving)
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, DutyStatus::OffDuty | DutyStatus::SleeperBerth)
    }

    /// Fixed render order for grid rows and summary tables
    pub fn all() -> [DutyStatus; 4] {
        [
            DutyStatus::OffDuty,
            DutyStatus::SleeperBerth,
            DutyStatus::Driving,
            DutyStatus::OnDutyNotDriving,
        ]
    }
}
