//! Persistence adapter over opaque key-value storage.
//!
//! # Responsibility
//! - Define the load/save contract the store persists its collections
//!   through.
//! - Isolate SQLite details from store/business orchestration.
//!
//! # Invariants
//! - Each logical collection is one payload under one stable key.
//! - Every save replaces the whole payload; there is no partial write.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Storage key for the serialized task collection.
pub const KEY_TASKS: &str = "tasks";
/// Storage key for the serialized list collection.
pub const KEY_LISTS: &str = "lists";

pub type StorageResult<T> = Result<T, StorageError>;

/// Error for persistence and payload-codec failures.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying database failure.
    Db(DbError),
    /// Persisted payload does not decode into the expected records.
    Codec(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "invalid persisted payload: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// Contract for opaque string key-value persistence.
///
/// Mirrors a browser-localStorage shape: whole-payload reads and writes
/// addressed by key, no iteration, no transactions spanning keys.
pub trait KeyValueStorage {
    /// Returns the payload stored under `key`, or `None` when absent.
    fn load(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous payload.
    fn save(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
