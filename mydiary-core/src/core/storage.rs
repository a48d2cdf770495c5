use crate::Result;
use rusqlite::Connection;
use std::path::Path;

/// Owns the SQLite connection backing a diary.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens the database at `path`, creating the file if it does not exist.
    ///
    /// The schema is not touched; call [`Storage::ensure_schema`] afterwards.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Creates the `entries` table if it is absent. Safe to call on every launch.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(include_str!("schema.sql"))?;
        Ok(())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn table_names(storage: &Storage) -> Vec<String> {
        storage
            .connection()
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_ensure_schema_creates_entries_table() {
        let temp = NamedTempFile::new().unwrap();
        let storage = Storage::open(temp.path()).unwrap();
        storage.ensure_schema().unwrap();

        assert!(table_names(&storage).contains(&"entries".to_string()));
    }

    #[test]
    fn test_ensure_schema_twice_is_noop() {
        let storage = Storage::open_in_memory().unwrap();
        storage.ensure_schema().unwrap();
        storage.ensure_schema().unwrap();

        let entries_tables = table_names(&storage)
            .into_iter()
            .filter(|name| name == "entries")
            .count();
        assert_eq!(entries_tables, 1);
    }

    #[test]
    fn test_schema_survives_reopen() {
        let temp = NamedTempFile::new().unwrap();
        {
            let storage = Storage::open(temp.path()).unwrap();
            storage.ensure_schema().unwrap();
            storage
                .connection()
                .execute(
                    "INSERT INTO entries (title, entry) VALUES (?, ?)",
                    ["Day 1", "Went hiking"],
                )
                .unwrap();
        }

        let storage = Storage::open(temp.path()).unwrap();
        storage.ensure_schema().unwrap();
        let count: i64 = storage
            .connection()
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_ensure_schema_on_garbage_file_fails() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "not a database, just some text padding it out").unwrap();

        let result = Storage::open(temp.path()).and_then(|s| s.ensure_schema());
        assert!(result.is_err());
    }
}
