//! Unified application error type.
//! All modules (cli, core, render, config) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Log document
    // ---------------------------
    #[error("Log document error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Log file not found: {0}")]
    LogFileNotFound(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No daily log found for date {0}")]
    NoLogForDate(String),

    #[error("Certification error: {0}")]
    Certification(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX export error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
