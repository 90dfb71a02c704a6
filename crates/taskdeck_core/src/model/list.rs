//! Task-list domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another list.
//! - `name` is the foreign key tasks reference; it is never the reserved
//!   virtual name and is unique case-insensitively (enforced by the store).

use crate::model::ALL_TASKS;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a list.
pub type ListId = Uuid;

/// Validation error for list state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListValidationError {
    /// List name is empty after trimming.
    EmptyName,
    /// List name collides with the reserved virtual list.
    ReservedName,
}

impl Display for ListValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "list name cannot be empty"),
            Self::ReservedName => write!(f, "`{ALL_TASKS}` is a reserved list name"),
        }
    }
}

impl Error for ListValidationError {}

/// Named container tasks are assigned to by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: ListId,
    pub name: String,
}

impl TaskList {
    /// Creates a list with a generated stable ID.
    ///
    /// # Errors
    /// - `EmptyName` when the trimmed name is empty.
    /// - `ReservedName` when the name is exactly the virtual "All Tasks".
    pub fn new(name: impl Into<String>) -> Result<Self, ListValidationError> {
        let list = Self {
            id: Uuid::new_v4(),
            name: name.into(),
        };
        list.validate()?;
        Ok(list)
    }

    /// Checks entity-level invariants.
    pub fn validate(&self) -> Result<(), ListValidationError> {
        if self.name.trim().is_empty() {
            return Err(ListValidationError::EmptyName);
        }
        if self.name == ALL_TASKS {
            return Err(ListValidationError::ReservedName);
        }
        Ok(())
    }
}
