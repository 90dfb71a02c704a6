//! Domain model for tasks and their lists.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep entity-level validation next to the entities themselves.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID assigned at creation.
//! - `"All Tasks"` is a reserved virtual name and never a real list.

use std::time::{SystemTime, UNIX_EPOCH};

pub mod list;
pub mod task;

/// Reserved virtual list name meaning "no filter applied".
///
/// Compared case-sensitively, matching how selection works in the UI.
pub const ALL_TASKS: &str = "All Tasks";

/// Current wall-clock time as unix epoch milliseconds.
///
/// Falls back to `0` if the system clock reports a pre-epoch time, so that
/// entity creation can never fail on a misconfigured clock.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
