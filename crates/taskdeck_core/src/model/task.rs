//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its due date/time value types.
//! - Validate entity state on every write path.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_at` is set once at creation and preserved across edits.
//! - `time` is meaningful only when paired with `date`.
//! - `list` always names a concrete list, never the reserved virtual one.

use crate::model::{now_epoch_ms, ALL_TASKS};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

static DUE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid due date regex"));
static DUE_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("valid due time regex"));

/// Validation error for task state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text is empty after trimming.
    EmptyText,
    /// Due date is not a real `YYYY-MM-DD` calendar day.
    InvalidDate(String),
    /// Due time is not a valid `HH:MM` 24-hour value.
    InvalidTime(String),
    /// A time of day was given without a date to anchor it.
    TimeWithoutDate,
    /// The list field names the reserved virtual list.
    ReservedList,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
            Self::InvalidDate(value) => write!(f, "invalid due date `{value}`; expected YYYY-MM-DD"),
            Self::InvalidTime(value) => write!(f, "invalid due time `{value}`; expected HH:MM"),
            Self::TimeWithoutDate => write!(f, "due time requires a due date"),
            Self::ReservedList => write!(f, "`{ALL_TASKS}` is reserved and cannot own tasks"),
        }
    }
}

impl Error for TaskValidationError {}

/// Calendar day in `YYYY-MM-DD` form.
///
/// Stored as the ISO string so the persisted payload stays human-readable;
/// lexicographic order on the inner string equals chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(String);

impl DueDate {
    /// Parses and validates a calendar day, including month length and
    /// leap-year February.
    pub fn parse(value: &str) -> Result<Self, TaskValidationError> {
        let invalid = || TaskValidationError::InvalidDate(value.to_string());
        let captures = DUE_DATE_RE.captures(value).ok_or_else(invalid)?;

        let year: u16 = captures[1].parse().map_err(|_| invalid())?;
        let month: u8 = captures[2].parse().map_err(|_| invalid())?;
        let day: u8 = captures[3].parse().map_err(|_| invalid())?;

        if month == 0 || month > 12 || day == 0 || day > days_in_month(year, month) {
            return Err(invalid());
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DueDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Time of day in 24-hour `HH:MM` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueTime(String);

impl DueTime {
    /// Parses and validates a 24-hour `HH:MM` value.
    pub fn parse(value: &str) -> Result<Self, TaskValidationError> {
        if !DUE_TIME_RE.is_match(value) {
            return Err(TaskValidationError::InvalidTime(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DueTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical task record.
///
/// `list` is a string reference to a list *name*, not an id. Deleting a list
/// leaves its tasks in place with a dangling name; such orphaned tasks stay
/// visible under the virtual "All Tasks" selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for edit/delete/toggle addressing.
    pub id: TaskId,
    /// Trimmed, non-empty description.
    pub text: String,
    /// Optional due day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DueDate>,
    /// Optional due time; only meaningful together with `date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DueTime>,
    /// Completion flag; starts `false`.
    pub completed: bool,
    /// Name of the owning list (string reference, not an id link).
    pub list: String,
    /// Unix epoch milliseconds, set once at creation.
    pub created_at: i64,
}

impl Task {
    /// Creates a new incomplete task with a generated stable ID.
    ///
    /// # Invariants
    /// - `date` and `time` start absent.
    /// - `completed` starts `false`.
    pub fn new(text: impl Into<String>, list: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            date: None,
            time: None,
            completed: false,
            list: list.into(),
            created_at: now_epoch_ms(),
        }
    }

    /// Checks entity-level invariants.
    ///
    /// # Errors
    /// - `EmptyText` when the trimmed text is empty.
    /// - `TimeWithoutDate` when a time is set without a date.
    /// - `ReservedList` when `list` names the virtual "All Tasks".
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        if self.time.is_some() && self.date.is_none() {
            return Err(TaskValidationError::TimeWithoutDate);
        }
        if self.list == ALL_TASKS {
            return Err(TaskValidationError::ReservedList);
        }
        Ok(())
    }
}

/// Request model for creating or editing a task.
///
/// Carries the user-supplied fields only; identity, list membership and
/// creation time are owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub text: String,
    pub date: Option<DueDate>,
    pub time: Option<DueTime>,
}

impl TaskDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            date: None,
            time: None,
        }
    }

    pub fn with_date(mut self, date: DueDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_time(mut self, time: DueTime) -> Self {
        self.time = Some(time);
        self
    }
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
