//! Task model.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Task key, unique within its parent list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A completable text item owned by exactly one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    key: TaskId,
    text: String,
    completed: bool,
}

impl Task {
    pub(crate) fn new(key: TaskId, text: impl Into<String>, completed: bool) -> Self {
        Self {
            key,
            text: text.into(),
            completed,
        }
    }

    pub fn key(&self) -> TaskId {
        self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Flips the completion flag and returns the new value.
    pub(crate) fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
