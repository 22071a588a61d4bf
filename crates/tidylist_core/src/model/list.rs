//! List model.
//!
//! # Invariants
//! - `tasks` stays `None` until the first task is added.
//! - `next_task_key` is strictly greater than every task key ever issued in
//!   this list, so deleted keys are never handed out again.

use crate::model::date::{serialize_optional, ListDate};
use crate::model::key_after;
use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// List key, unique within the live collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(u64);

impl ListId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ListId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for ListId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, datable collection of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskList {
    key: ListId,
    title: String,
    #[serde(serialize_with = "serialize_optional")]
    date: Option<ListDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tasks: Option<Vec<Task>>,
    #[serde(skip)]
    next_task_key: u64,
}

impl TaskList {
    /// Creates a list with no date and no task sequence.
    pub(crate) fn new(key: ListId, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            date: None,
            tasks: None,
            next_task_key: 1,
        }
    }

    /// Rebuilds a list from already validated parts.
    ///
    /// The task counter resumes after the highest existing task key.
    /// Returns `None` when that key leaves no room for another task.
    pub(crate) fn from_parts(
        key: ListId,
        title: String,
        date: Option<ListDate>,
        tasks: Option<Vec<Task>>,
    ) -> Option<Self> {
        let highest = tasks.iter().flatten().map(|task| task.key().get()).max();
        Some(Self {
            key,
            title,
            date,
            tasks,
            next_task_key: key_after(highest)?,
        })
    }

    pub fn key(&self) -> ListId {
        self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the set date, or `""` when unset.
    pub fn date(&self) -> &str {
        self.date.as_ref().map(ListDate::as_str).unwrap_or("")
    }

    pub fn list_date(&self) -> Option<&ListDate> {
        self.date.as_ref()
    }

    /// Returns `None` until the first task has been added.
    pub fn tasks(&self) -> Option<&[Task]> {
        self.tasks.as_deref()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.as_ref().map_or(0, Vec::len)
    }

    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks
            .as_ref()?
            .iter()
            .find(|task| task.key() == task_id)
    }

    pub(crate) fn set_date(&mut self, date: ListDate) {
        self.date = Some(date);
    }

    /// Appends a task, creating the sequence on first use.
    ///
    /// Returns `None` without touching the list once the task counter is
    /// exhausted.
    pub(crate) fn push_task(&mut self, text: impl Into<String>) -> Option<TaskId> {
        let key = TaskId::new(self.next_task_key);
        self.next_task_key = key_after(Some(self.next_task_key))?;
        self.tasks
            .get_or_insert_with(Vec::new)
            .push(Task::new(key, text, false));
        Some(key)
    }

    /// Removes one task; returns whether anything was removed.
    pub(crate) fn remove_task(&mut self, task_id: TaskId) -> bool {
        let Some(tasks) = self.tasks.as_mut() else {
            return false;
        };
        let before = tasks.len();
        tasks.retain(|task| task.key() != task_id);
        tasks.len() != before
    }

    pub(crate) fn find_task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks
            .as_mut()?
            .iter_mut()
            .find(|task| task.key() == task_id)
    }
}
