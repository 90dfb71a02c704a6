//! Core domain logic for Taskdeck.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list::{ListId, ListValidationError, TaskList};
pub use model::task::{DueDate, DueTime, Task, TaskDraft, TaskId, TaskValidationError};
pub use model::ALL_TASKS;
pub use storage::{
    KeyValueStorage, MemoryStorage, SqliteStorage, StorageError, KEY_LISTS, KEY_TASKS,
};
pub use store::{Selection, Store, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
