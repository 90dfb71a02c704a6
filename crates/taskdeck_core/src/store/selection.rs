//! Active-list selection.

use crate::model::ALL_TASKS;

/// Which tasks the view is currently filtered to.
///
/// `"All Tasks"` is a virtual selection, never a real list; everything else
/// filters by exact list name. A selection is allowed to name a list that no
/// longer exists, in which case listings simply come back empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No filter; every task is visible.
    AllTasks,
    /// Only tasks whose `list` equals this name.
    List(String),
}

impl Selection {
    /// Maps a display name onto a selection.
    ///
    /// The reserved name is matched case-sensitively, same as the exact
    /// string comparison selection has always used.
    pub fn from_name(name: &str) -> Self {
        if name == ALL_TASKS {
            Self::AllTasks
        } else {
            Self::List(name.to_string())
        }
    }

    /// Display name of this selection.
    pub fn name(&self) -> &str {
        match self {
            Self::AllTasks => ALL_TASKS,
            Self::List(name) => name,
        }
    }

    /// Whether a task assigned to `task_list` is visible under this
    /// selection.
    pub fn matches(&self, task_list: &str) -> bool {
        match self {
            Self::AllTasks => true,
            Self::List(name) => name == task_list,
        }
    }
}
