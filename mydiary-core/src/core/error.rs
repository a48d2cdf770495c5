//! Error types for the My Diary core library.

use thiserror::Error;

/// All errors that can occur within the My Diary core library.
#[derive(Debug, Error)]
pub enum DiaryError {
    /// A SQLite operation failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An entry ID was requested that does not exist in the database.
    #[error("Entry not found: {0}")]
    EntryNotFound(i64),

    /// A draft was submitted with an empty title or body.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings or other stored data could not be (de)serialized as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`DiaryError`].
pub type Result<T> = std::result::Result<T, DiaryError>;

impl DiaryError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(e) => format!("Failed to save: {e}"),
            Self::EntryNotFound(_) => "Entry no longer exists".to_string(),
            Self::ValidationFailed(msg) => msg.clone(),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}
