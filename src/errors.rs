//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage initialization failed: {0}")]
    StorageInit(String),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Corrupt expense #{id}: stored date '{date}' is not YYYY-MM-DD")]
    CorruptRecord { id: i64, date: String },

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Please enter the expense {0}.")]
    MissingField(&'static str),

    #[error("Invalid expense amount '{0}'. Please enter a valid number.")]
    InvalidAmount(String),

    #[error("Invalid limit amount '{0}'. Please enter a valid number.")]
    InvalidLimit(String),

    #[error("Invalid date format '{0}'. Use YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Use YYYY-MM.")]
    InvalidMonth(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors caused by user input; the store is never touched for these.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::MissingField(_)
                | AppError::InvalidAmount(_)
                | AppError::InvalidLimit(_)
                | AppError::InvalidDate(_)
                | AppError::InvalidMonth(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
