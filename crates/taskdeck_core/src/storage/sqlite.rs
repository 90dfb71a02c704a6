//! SQLite-backed key-value storage.
//!
//! # Responsibility
//! - Persist opaque payloads in the `kv_store` table.
//! - Keep SQL details inside the core persistence boundary.

use crate::db::{open_db, open_db_in_memory};
use crate::storage::{KeyValueStorage, StorageResult};
use rusqlite::{params, Connection};
use std::path::Path;

/// Durable key-value storage over a migrated SQLite database.
#[derive(Debug)]
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens (or creates) a database file, applying pending migrations.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self { conn: open_db(path)? })
    }

    /// Opens a private in-memory database, mainly for tests and probes.
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }
}

impl KeyValueStorage for SqliteStorage {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_store WHERE key = ?1;")?;

        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn save(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
