//! Core library for My Diary — a single-list diary stored in SQLite.
//!
//! The primary entry point is [`Journal`], which owns the open database and
//! performs every read and write of diary entries. [`DiarySession`] is the
//! screen-level state (drafts and the rendered entry list) that a front-end
//! keeps in sync with the journal.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    entry::{Entry, EntryDraft, EMPTY_RECORD_MESSAGE},
    error::{DiaryError, Result},
    journal::{Journal, Listing},
    session::{DiarySession, Notice, ADD_ENTRY_NOTICE_TITLE},
    storage::Storage,
};
