use crate::{DiaryError, Result};
use serde::{Deserialize, Serialize};

/// Message shown when a draft is submitted with a missing title or body.
pub const EMPTY_RECORD_MESSAGE: &str = "You cannot add an empty/missing record";

/// One persisted diary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub title: String,
    pub entry: String,
}

/// A title/body pair waiting to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub entry: String,
}

impl EntryDraft {
    pub fn new(title: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entry: entry.into(),
        }
    }

    /// Both the title and the body must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`DiaryError::ValidationFailed`] when either part is empty.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() || self.entry.is_empty() {
            return Err(DiaryError::ValidationFailed(EMPTY_RECORD_MESSAGE.to_string()));
        }
        Ok(())
    }
}
