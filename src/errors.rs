//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent. Recoverable data problems (corrupt stored entries,
//! unparsable target) are handled where they occur and never show up here.

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
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid calories value: {0}")]
    InvalidCalories(String),

    #[error("Invalid duration value: {0}")]
    InvalidDuration(String),

    #[error("Unknown preset '{0}'. Run `lightlog presets` to see the available ones")]
    UnknownPreset(String),

    #[error("Entry id '{0}' matches more than one entry, use more characters")]
    AmbiguousId(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    // ---------------------------
    // Settings
    // ---------------------------
    #[error("Avatar image is too large ({size} bytes, limit is {limit} bytes)")]
    AvatarTooLarge { size: u64, limit: u64 },

    #[error("Reminders are not supported: no desktop notification tool found")]
    RemindersUnsupported,

    #[error("Reminder permission denied")]
    RemindersDenied,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("No entries to export")]
    NothingToExport,

    #[error("Export error: {0}")]
    Export(String),

    #[error("Backup error: {0}")]
    Backup(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(format!("CSV error: {e}"))
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(e: zip::result::ZipError) -> Self {
        AppError::Backup(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
