//! In-memory list/task store and its change stream.
//!
//! # Responsibility
//! - Own the canonical list collection and every mutation on it.
//! - Publish one change record per committed mutation.
//!
//! # Invariants
//! - A mutation either fully applies or leaves the store untouched.
//! - `version` grows by exactly one per committed mutation.
//! - Key counters never wrap; an exhausted counter rejects the mutation.
//! - Subscribers run after the mutation has been applied.

pub mod events;
pub mod task_store;

use crate::model::list::ListId;
use crate::model::task::TaskId;
use crate::model::InputError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by store lookups and mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    ListNotFound(ListId),
    TaskNotFound { list_id: ListId, task_id: TaskId },
    InvalidInput(InputError),
    /// No list key is left to hand out.
    ListKeysExhausted,
    /// No task key is left to hand out in this list.
    TaskKeysExhausted(ListId),
}

impl StoreError {
    /// Returns whether this is an identifier lookup failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound(_) | Self::TaskNotFound { .. })
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListNotFound(id) => write!(f, "list not found: {id}"),
            Self::TaskNotFound { list_id, task_id } => {
                write!(f, "task not found: {task_id} in list {list_id}")
            }
            Self::InvalidInput(err) => write!(f, "{err}"),
            Self::ListKeysExhausted => write!(f, "no list keys left"),
            Self::TaskKeysExhausted(id) => write!(f, "no task keys left in list {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::ListNotFound(_)
            | Self::TaskNotFound { .. }
            | Self::ListKeysExhausted
            | Self::TaskKeysExhausted(_) => None,
        }
    }
}

impl From<InputError> for StoreError {
    fn from(value: InputError) -> Self {
        Self::InvalidInput(value)
    }
}
