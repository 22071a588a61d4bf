//! Change records published by the store.

use crate::model::list::ListId;
use crate::model::task::TaskId;

/// One committed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    ListCreated {
        list_id: ListId,
    },
    ListDeleted {
        list_id: ListId,
        /// Number of tasks destroyed together with the list.
        task_count: usize,
    },
    ListDateSet {
        list_id: ListId,
    },
    TaskCreated {
        list_id: ListId,
        task_id: TaskId,
    },
    TaskDeleted {
        list_id: ListId,
        task_id: TaskId,
    },
    TaskToggled {
        list_id: ListId,
        task_id: TaskId,
        completed: bool,
    },
}

impl StoreEvent {
    /// Stable event name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListCreated { .. } => "list_create",
            Self::ListDeleted { .. } => "list_delete",
            Self::ListDateSet { .. } => "list_set_date",
            Self::TaskCreated { .. } => "task_add",
            Self::TaskDeleted { .. } => "task_delete",
            Self::TaskToggled { .. } => "task_toggle",
        }
    }

    /// Returns the list touched by this change.
    pub fn list_id(&self) -> ListId {
        match *self {
            Self::ListCreated { list_id }
            | Self::ListDeleted { list_id, .. }
            | Self::ListDateSet { list_id }
            | Self::TaskCreated { list_id, .. }
            | Self::TaskDeleted { list_id, .. }
            | Self::TaskToggled { list_id, .. } => list_id,
        }
    }

    /// Creation events trigger the "created" notification.
    pub fn is_creation(&self) -> bool {
        matches!(self, Self::ListCreated { .. } | Self::TaskCreated { .. })
    }
}

/// Change record handed to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreChange {
    /// Store version after this change was applied.
    pub version: u64,
    pub event: StoreEvent,
}

/// Handle returned by `TaskStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
