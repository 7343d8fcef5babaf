//! Error handling for flashdeck.
//!
//! This module provides:
//! - [`FlashError`]: The main error enum for all flashdeck operations
//! - [`ErrorCode`]: Stable codes attached to log events

mod codes;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for flashdeck operations.
///
/// Lookup misses are never errors; repositories return `Ok(None)` for them.
#[derive(Error, Debug)]
pub enum FlashError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Resources directory not found: {}", .0.display())]
    ResourcesNotFound(PathBuf),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Requires an interactive terminal: {0}")]
    NotInteractive(String),
}

impl FlashError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Database(_) => ErrorCode::DatabaseError,
            Self::Migration(_) => ErrorCode::MigrationFailed,
            Self::Io(_) => ErrorCode::IoError,
            Self::Csv(_) => ErrorCode::CsvMalformed,
            Self::Walk(_) => ErrorCode::WalkFailed,
            Self::ResourcesNotFound(_) => ErrorCode::ResourcesNotFound,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::NotInteractive(_) => ErrorCode::NotInteractive,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlashError>;
