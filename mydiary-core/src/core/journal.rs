//! Entry operations over a My Diary SQLite database.

use crate::{DiaryError, Entry, EntryDraft, Result, Storage};
use rusqlite::Connection;
use std::path::Path;

/// An open diary backed by a SQLite database.
///
/// `Journal` is the only component that reads or writes entries. It is
/// constructed once at startup and handed to whoever issues queries; the
/// desktop application keeps it behind an `Arc<Mutex<_>>`.
pub struct Journal {
    storage: Storage,
    revision: u64,
}

/// Every entry as of one point in the journal's write history.
///
/// `revision` counts the writes this `Journal` has performed, so of two
/// listings the one with the higher revision is the newer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub revision: u64,
    pub entries: Vec<Entry>,
}

impl Journal {
    /// Opens the diary at `path` and makes sure the `entries` table exists.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DiaryError::Database`] if the file cannot be opened
    /// or the schema cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let journal = Self::from_storage(Storage::open(path)?);
        journal.ensure_schema()?;
        Ok(journal)
    }

    /// Wraps an already opened [`Storage`] without touching the schema.
    pub fn from_storage(storage: Storage) -> Self {
        Self {
            storage,
            revision: 0,
        }
    }

    pub fn in_memory() -> Result<Self> {
        let journal = Self::from_storage(Storage::open_in_memory()?);
        journal.ensure_schema()?;
        Ok(journal)
    }

    /// Creates the `entries` table if it is absent.
    pub fn ensure_schema(&self) -> Result<()> {
        self.storage.ensure_schema()?;
        log::info!("diary schema ready");
        Ok(())
    }

    /// Returns the underlying SQLite connection.
    pub fn connection(&self) -> &Connection {
        self.storage.connection()
    }

    /// Returns every entry in the order SQLite yields them.
    ///
    /// No `ORDER BY` is applied; rows come back in rowid order, which for an
    /// autoincrement key is insertion order.
    pub fn list_entries(&self) -> Result<Vec<Entry>> {
        let mut stmt = self
            .connection()
            .prepare("SELECT id, title, entry FROM entries")?;
        let entries = stmt
            .query_map([], map_entry_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        log::debug!("fetched {} entries", entries.len());
        Ok(entries)
    }

    /// Number of writes performed through this handle.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Lists every entry, tagged with the current revision.
    pub fn listing(&self) -> Result<Listing> {
        Ok(Listing {
            revision: self.revision,
            entries: self.list_entries()?,
        })
    }

    /// Fetches a single entry by ID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DiaryError::EntryNotFound`] if no row has `id`.
    pub fn get_entry(&self, id: i64) -> Result<Entry> {
        self.connection()
            .query_row(
                "SELECT id, title, entry FROM entries WHERE id = ?1",
                [id],
                map_entry_row,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => DiaryError::EntryNotFound(id),
                other => other.into(),
            })
    }

    pub fn count_entries(&self) -> Result<usize> {
        let count: i64 = self
            .connection()
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Inserts `draft` as a new row and returns the ID SQLite assigned.
    ///
    /// No emptiness check happens here; callers validate the draft first.
    pub fn add_entry(&mut self, draft: &EntryDraft) -> Result<i64> {
        let tx = self.storage.connection_mut().transaction()?;
        tx.execute(
            "INSERT INTO entries (title, entry) VALUES (?1, ?2)",
            rusqlite::params![draft.title, draft.entry],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        self.revision += 1;
        log::info!("added entry {id}");
        Ok(id)
    }

    /// Deletes the entry with `id` and returns how many rows were removed.
    ///
    /// An unknown `id` is not an error; the result is simply `0`.
    pub fn delete_entry(&mut self, id: i64) -> Result<usize> {
        let tx = self.storage.connection_mut().transaction()?;
        let removed = tx.execute("DELETE FROM entries WHERE id = ?1", [id])?;
        tx.commit()?;
        self.revision += 1;
        if removed == 0 {
            log::debug!("delete of entry {id} matched no rows");
        } else {
            log::info!("deleted entry {id}");
        }
        Ok(removed)
    }

    /// Overwrites the title and body of the entry with `id` and returns the stored row.
    ///
    /// Only the row matching `id` is changed. Earlier releases of the app
    /// issued the update without a `WHERE` clause and rewrote every row.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DiaryError::EntryNotFound`] if no row has `id`; the
    /// transaction is rolled back and nothing changes.
    pub fn update_entry(&mut self, id: i64, title: &str, entry: &str) -> Result<Entry> {
        let tx = self.storage.connection_mut().transaction()?;
        tx.execute(
            "UPDATE entries SET title = ?1, entry = ?2 WHERE id = ?3",
            rusqlite::params![title, entry, id],
        )?;

        if tx.changes() == 0 {
            return Err(DiaryError::EntryNotFound(id));
        }

        tx.commit()?;
        self.revision += 1;
        log::info!("updated entry {id}");
        self.get_entry(id)
    }
}

fn map_entry_row(row: &rusqlite::Row) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        title: row.get(1)?,
        entry: row.get(2)?,
    })
}
