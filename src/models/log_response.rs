use super::daily_log::DailyLog;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Compliance roll-up as computed by the backend. The score field is
/// deserialized leniently: JSON numbers, numeric strings, or anything else
/// all land on a finite f64 (garbage and NaN collapse to 0.0), so no NaN
/// ever reaches grading or display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceSummary {
    #[serde(deserialize_with = "lenient_score", default)]
    pub score: f64,
    #[serde(default)]
    pub violation_count: u32,
    #[serde(default)]
    pub is_compliant: bool,
    #[serde(default)]
    pub violations: Vec<String>,
}

fn lenient_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(score_from_value(&raw))
}

/// Fallback-to-zero coercion for the compliance score (never errors)
pub fn score_from_value(v: &serde_json::Value) -> f64 {
    let n = match v {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

/// The full document the backend serves: daily logs plus the compliance
/// roll-up, with an optional backend-supplied error string rendered as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EldLogResponse {
    #[serde(default)]
    pub logs: Vec<DailyLog>,
    pub compliance: ComplianceSummary,
    #[serde(default)]
    pub error: Option<String>,
}

impl EldLogResponse {
    /// Load the backend document from disk.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::LogFileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let response: EldLogResponse = serde_json::from_str(&content)?;
        Ok(response)
    }

    /// Write the document back (used by the file certification backend).
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn log_for_date(&self, date: &str) -> Option<&DailyLog> {
        self.logs.iter().find(|l| l.date == date)
    }

    pub fn log_for_date_mut(&mut self, date: &str) -> Option<&mut DailyLog> {
        self.logs.iter_mut().find(|l| l.date == date)
    }
}
