#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn eld() -> Command {
    cargo_bin_cmd!("eldview")
}

/// Create a unique fixture path inside the system temp dir and remove any
/// existing file
pub fn setup_log_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eldview.json", name));
    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    log_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a small backend document useful for most tests: two daily logs
/// (one certified) and a clean compliance roll-up.
pub fn write_fixture(log_path: &str) {
    let doc = serde_json::json!({
        "logs": [
            {
                "date": "2025-03-10",
                "driver": "J. Doe",
                "vehicle": "TRK-42",
                "entries": [
                    { "id": 1, "start_time": "00:00", "end_time": "06:00",
                      "duty_status": "off_duty", "location": "Yard" },
                    { "id": 2, "start_time": "06:00", "end_time": "08:00",
                      "duty_status": "on_duty_not_driving", "location": "Yard" },
                    { "id": 3, "start_time": "08:00", "end_time": "12:00",
                      "duty_status": "driving", "location": "I-80 W" },
                    { "id": 4, "start_time": "12:00", "end_time": "13:00",
                      "duty_status": "sleeper_berth" },
                    { "id": 5, "start_time": "13:00", "end_time": "17:00",
                      "duty_status": "driving", "location": "I-80 W" }
                ],
                "grid_points": [
                    { "grid_row": 0, "grid_column": 0, "duty_status_symbol": 1 },
                    { "grid_row": 3, "grid_column": 2, "duty_status_symbol": 3 },
                    { "grid_row": 6, "grid_column": 4, "duty_status_symbol": 4 }
                ],
                "certified": false
            },
            {
                "date": "2025-03-11",
                "driver": "J. Doe",
                "vehicle": "TRK-42",
                "entries": [
                    { "id": 6, "start_time": "23:00", "end_time": "00:30",
                      "duty_status": "driving", "location": "I-80 W" }
                ],
                "grid_points": [],
                "certified": true,
                "certified_at": "2025-03-12T08:00:00-05:00",
                "signature": "J. Doe"
            }
        ],
        "compliance": {
            "score": 92,
            "violation_count": 0,
            "is_compliant": true,
            "violations": []
        }
    });

    fs::write(log_path, serde_json::to_string_pretty(&doc).unwrap()).expect("write fixture");
}

/// Variant with a garbage score and recorded violations, for the grading
/// fallback and precedence tests.
pub fn write_violation_fixture(log_path: &str) {
    let doc = serde_json::json!({
        "logs": [],
        "compliance": {
            "score": "not a number",
            "violation_count": 2,
            "is_compliant": true,
            "violations": ["11-hour driving limit exceeded", "missing 30-minute break"]
        },
        "error": "partial sync: 1 record skipped"
    });

    fs::write(log_path, serde_json::to_string_pretty(&doc).unwrap()).expect("write fixture");
}
