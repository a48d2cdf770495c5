//! Asynchronous wrappers around [`Journal`] used by the UI.
//!
//! Each mutation and the listing that follows it run under one lock, so the
//! listing a task returns always holds that write and nothing newer than its
//! revision. The SQLite work itself runs on tokio's blocking pool. Errors are
//! reduced to their user-facing text because iced messages must be `Clone`.

use mydiary_core::{EntryDraft, Journal, Listing, Result};
use std::sync::{Arc, Mutex};

/// The single journal handle shared by all UI tasks.
pub type SharedJournal = Arc<Mutex<Journal>>;

pub fn share(journal: Journal) -> SharedJournal {
    Arc::new(Mutex::new(journal))
}

fn with_journal<T>(
    journal: &SharedJournal,
    op: impl FnOnce(&mut Journal) -> Result<T>,
) -> std::result::Result<T, String> {
    let mut guard = journal
        .lock()
        .map_err(|_| "Diary storage is unavailable".to_string())?;
    op(&mut *guard).map_err(|e| e.user_message())
}

async fn run_blocking<T, F>(journal: SharedJournal, op: F) -> std::result::Result<T, String>
where
    T: Send + 'static,
    F: FnOnce(&mut Journal) -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || with_journal(&journal, op))
        .await
        .unwrap_or_else(|e| Err(format!("Diary task failed: {e}")))
}

pub async fn ensure_schema(journal: SharedJournal) -> std::result::Result<(), String> {
    run_blocking(journal, |j| j.ensure_schema()).await
}

pub async fn load_entries(journal: SharedJournal) -> std::result::Result<Listing, String> {
    run_blocking(journal, |j| j.listing()).await
}

/// Inserts `draft` and lists every entry without releasing the journal in between.
pub async fn add_entry(
    journal: SharedJournal,
    draft: EntryDraft,
) -> std::result::Result<Listing, String> {
    run_blocking(journal, move |j| {
        j.add_entry(&draft)?;
        j.listing()
    })
    .await
}

/// Deletes the entry with `id` and lists every entry without releasing the journal in between.
pub async fn delete_entry(journal: SharedJournal, id: i64) -> std::result::Result<Listing, String> {
    run_blocking(journal, move |j| {
        j.delete_entry(id)?;
        j.listing()
    })
    .await
}
