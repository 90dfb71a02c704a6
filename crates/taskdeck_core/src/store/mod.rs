//! Task/list store: the single source of truth the view renders from.
//!
//! # Responsibility
//! - Own the task and list collections, the active selection and the
//!   editing marker.
//! - Provide every query and mutation operation; nothing else touches the
//!   collections directly.
//! - Persist both collections through the key-value adapter after every
//!   mutation.
//!
//! # Invariants
//! - Entity validation runs before any collection mutation; a rejected
//!   operation leaves the collections untouched.
//! - Task ids and list ids are unique within their collections.
//! - List names are unique case-insensitively.
//! - Deleting a list never deletes or reassigns its tasks.
//! - A task's `list` is always a concrete name, never `"All Tasks"`.

use crate::model::list::{ListId, ListValidationError, TaskList};
use crate::model::task::{Task, TaskDraft, TaskId, TaskValidationError};
use crate::model::ALL_TASKS;
use crate::storage::{KeyValueStorage, StorageError, KEY_LISTS, KEY_TASKS};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod selection;

pub use selection::Selection;

/// Lists seeded on first run, when the persisted list collection is empty.
const DEFAULT_LIST_NAMES: &[&str] = &["Work", "Personal", "Shopping"];

/// List a task falls back to when created under the "All Tasks" selection.
const FALLBACK_LIST: &str = "Personal";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error surfaced by store operations.
///
/// All failures are synchronous and non-fatal; nothing is retried.
#[derive(Debug)]
pub enum StoreError {
    /// Task-level validation failure (empty text, bad date/time pairing).
    Task(TaskValidationError),
    /// List-level validation failure (empty or reserved name).
    List(ListValidationError),
    /// Case-insensitive list-name collision.
    DuplicateList { name: String },
    /// Operation referenced a task id that does not exist.
    TaskNotFound(TaskId),
    /// Operation referenced a list id that does not exist.
    ListNotFound(ListId),
    /// Persistence-layer failure while saving or loading collections.
    Storage(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Task(err) => write!(f, "{err}"),
            Self::List(err) => write!(f, "{err}"),
            Self::DuplicateList { name } => write!(f, "a list named `{name}` already exists"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::ListNotFound(id) => write!(f, "list not found: {id}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Task(err) => Some(err),
            Self::List(err) => Some(err),
            Self::DuplicateList { .. } => None,
            Self::TaskNotFound(_) => None,
            Self::ListNotFound(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Task(value)
    }
}

impl From<ListValidationError> for StoreError {
    fn from(value: ListValidationError) -> Self {
        Self::List(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Owns the collections and all operations over them.
///
/// Explicitly constructed and handed to callers; there is no ambient
/// singleton. Single-threaded by design: every operation runs to completion
/// before the next begins.
#[derive(Debug)]
pub struct Store<S: KeyValueStorage> {
    storage: S,
    tasks: Vec<Task>,
    lists: Vec<TaskList>,
    selection: Selection,
    editing: Option<TaskId>,
}

impl<S: KeyValueStorage> Store<S> {
    /// Loads both collections from storage and seeds default lists when the
    /// list collection is empty.
    ///
    /// Starts at the "All Tasks" selection with no task being edited.
    ///
    /// # Errors
    /// - `Storage` when a payload cannot be read or decoded.
    pub fn open(storage: S) -> StoreResult<Self> {
        let tasks = load_collection(&storage, KEY_TASKS)?;
        let lists = load_collection(&storage, KEY_LISTS)?;

        let mut store = Self {
            storage,
            tasks,
            lists,
            selection: Selection::AllTasks,
            editing: None,
        };

        if store.lists.is_empty() {
            for name in DEFAULT_LIST_NAMES {
                store.lists.push(TaskList::new(*name)?);
            }
            store.save_lists()?;
            info!(
                "event=store_seed module=store status=ok lists={}",
                DEFAULT_LIST_NAMES.len()
            );
        }

        info!(
            "event=store_open module=store status=ok tasks={} lists={}",
            store.tasks.len(),
            store.lists.len()
        );
        Ok(store)
    }

    /// Creates a task from a draft and appends it to the collection.
    ///
    /// The task joins the active list, or the fallback list when "All Tasks"
    /// is selected. Text is trimmed before validation and storage.
    ///
    /// # Errors
    /// - `Task` when the trimmed text is empty or a time lacks a date.
    /// - `Storage` when persisting fails (the task is already appended).
    pub fn create_task(&mut self, draft: &TaskDraft) -> StoreResult<Task> {
        let list = match &self.selection {
            Selection::AllTasks => FALLBACK_LIST.to_string(),
            Selection::List(name) => name.clone(),
        };

        let mut task = Task::new(draft.text.trim(), list);
        task.date = draft.date.clone();
        task.time = draft.time.clone();
        task.validate()?;

        self.tasks.push(task.clone());
        self.save_tasks()?;
        info!(
            "event=task_create module=store status=ok id={} list={}",
            task.id, task.list
        );
        Ok(task)
    }

    /// Rewrites the user-editable fields of an existing task.
    ///
    /// `id`, `list`, `completed` and `created_at` are preserved.
    ///
    /// # Errors
    /// - `TaskNotFound` when no task has `id`.
    /// - `Task` when the draft fails validation; the stored task is kept.
    pub fn update_task(&mut self, id: TaskId, draft: &TaskDraft) -> StoreResult<Task> {
        let index = self.task_index(id)?;

        let mut updated = self.tasks[index].clone();
        updated.text = draft.text.trim().to_string();
        updated.date = draft.date.clone();
        updated.time = draft.time.clone();
        updated.validate()?;

        self.tasks[index] = updated.clone();
        self.save_tasks()?;
        info!("event=task_update module=store status=ok id={id}");
        Ok(updated)
    }

    /// Removes a task by id.
    ///
    /// Also clears the editing marker if it pointed at the removed task.
    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<()> {
        let index = self.task_index(id)?;
        self.tasks.remove(index);
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.save_tasks()?;
        info!("event=task_delete module=store status=ok id={id}");
        Ok(())
    }

    /// Flips a task's completion flag and returns the new value.
    pub fn toggle_complete(&mut self, id: TaskId) -> StoreResult<bool> {
        let index = self.task_index(id)?;
        self.tasks[index].completed = !self.tasks[index].completed;
        let completed = self.tasks[index].completed;
        self.save_tasks()?;
        debug!("event=task_toggle module=store status=ok id={id} completed={completed}");
        Ok(completed)
    }

    /// Creates a list with a trimmed, case-insensitively unique name.
    ///
    /// # Errors
    /// - `List` when the trimmed name is empty or reserved.
    /// - `DuplicateList` when a case-insensitive match already exists.
    pub fn create_list(&mut self, name: &str) -> StoreResult<TaskList> {
        let list = TaskList::new(name.trim())?;
        if self
            .lists
            .iter()
            .any(|existing| existing.name.to_lowercase() == list.name.to_lowercase())
        {
            return Err(StoreError::DuplicateList { name: list.name });
        }

        self.lists.push(list.clone());
        self.save_lists()?;
        info!(
            "event=list_create module=store status=ok id={} name={}",
            list.id, list.name
        );
        Ok(list)
    }

    /// Removes a list by id, leaving its tasks untouched.
    ///
    /// Tasks that referenced the removed name become orphaned and remain
    /// visible under "All Tasks". If the active selection no longer matches
    /// any list, it resets to "All Tasks".
    pub fn delete_list(&mut self, id: ListId) -> StoreResult<()> {
        let index = self
            .lists
            .iter()
            .position(|list| list.id == id)
            .ok_or(StoreError::ListNotFound(id))?;
        let removed = self.lists.remove(index);

        if let Selection::List(active) = &self.selection {
            if !self.lists.iter().any(|list| list.name == *active) {
                self.selection = Selection::AllTasks;
            }
        }

        self.save_lists()?;
        info!(
            "event=list_delete module=store status=ok id={id} name={}",
            removed.name
        );
        Ok(())
    }

    /// Sets the active selection and clears the editing marker.
    ///
    /// A name with no matching list is allowed; `list_tasks` then returns
    /// an empty sequence until the selection changes again.
    pub fn select_list(&mut self, name: &str) {
        self.selection = Selection::from_name(name);
        self.editing = None;
        debug!(
            "event=list_select module=store status=ok name={}",
            self.selection.name()
        );
    }

    /// Snapshot of the tasks visible under the active selection, sorted.
    ///
    /// Sort rule: incomplete before completed; within each group, dated
    /// tasks appear in non-decreasing date order among themselves while
    /// undated tasks keep their insertion slots. Time of day is never a
    /// tiebreak.
    pub fn list_tasks(&self) -> Vec<Task> {
        let mut visible: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| self.selection.matches(&task.list))
            .cloned()
            .collect();

        // Stable, so insertion order survives within each group.
        visible.sort_by_key(|task| task.completed);
        let split = visible
            .iter()
            .position(|task| task.completed)
            .unwrap_or(visible.len());
        order_dated_tasks(&mut visible[..split]);
        order_dated_tasks(&mut visible[split..]);
        visible
    }

    /// Number of tasks assigned to `name`, or the total under "All Tasks".
    pub fn count_for_list(&self, name: &str) -> usize {
        if name == ALL_TASKS {
            return self.tasks.len();
        }
        self.tasks.iter().filter(|task| task.list == name).count()
    }

    /// Marks a task as the one currently being edited.
    pub fn begin_edit(&mut self, id: TaskId) -> StoreResult<()> {
        self.task_index(id)?;
        self.editing = Some(id);
        Ok(())
    }

    /// Clears the editing marker without touching the task.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// The task currently being edited, if any.
    pub fn editing_task(&self) -> Option<TaskId> {
        self.editing
    }

    /// All lists in creation order.
    pub fn lists(&self) -> &[TaskList] {
        &self.lists
    }

    /// The active selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Looks up a single task by id.
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn task_index(&self, id: TaskId) -> StoreResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))
    }

    fn save_tasks(&mut self) -> StoreResult<()> {
        save_collection(&mut self.storage, KEY_TASKS, &self.tasks)
    }

    fn save_lists(&mut self) -> StoreResult<()> {
        save_collection(&mut self.storage, KEY_LISTS, &self.lists)
    }
}

fn load_collection<S, T>(storage: &S, key: &str) -> StoreResult<Vec<T>>
where
    S: KeyValueStorage,
    T: DeserializeOwned,
{
    match storage.load(key)? {
        Some(payload) => Ok(serde_json::from_str(&payload).map_err(StorageError::from)?),
        None => Ok(Vec::new()),
    }
}

fn save_collection<S, T>(storage: &mut S, key: &str, records: &[T]) -> StoreResult<()>
where
    S: KeyValueStorage,
    T: Serialize,
{
    let payload = serde_json::to_string(records).map_err(StorageError::from)?;
    storage.save(key, &payload)?;
    Ok(())
}

/// Chronologically reorders the dated tasks of one completion group.
///
/// Only the slots already holding dated tasks are rewritten; undated tasks
/// stay exactly where they were. A pairwise comparator cannot express this
/// ("undated compares equal to everything" is not transitive), hence the
/// two-pass shape.
fn order_dated_tasks(group: &mut [Task]) {
    let slots: Vec<usize> = group
        .iter()
        .enumerate()
        .filter(|(_, task)| task.date.is_some())
        .map(|(index, _)| index)
        .collect();

    let mut dated: Vec<Task> = slots.iter().map(|&index| group[index].clone()).collect();
    // Stable, so equal dates keep insertion order; time is never compared.
    dated.sort_by(|a, b| a.date.cmp(&b.date));

    for (slot, task) in slots.into_iter().zip(dated) {
        group[slot] = task;
    }
}
