//! Canonical list/task store.
//!
//! # Responsibility
//! - Provide the only sanctioned mutation and query surface over lists/tasks.
//! - Hand out list keys from a monotonic counter.
//!
//! # Invariants
//! - `next_list_key` is strictly greater than every list key ever issued.
//! - Blank input and unknown identifiers never mutate state.
//! - Query results are owned copies; callers cannot alias store internals.

use crate::model::date::ListDate;
use crate::model::list::{ListId, TaskList};
use crate::model::task::TaskId;
use crate::model::{is_present, key_after, InputError};
use crate::store::events::{StoreChange, StoreEvent, SubscriptionId};
use crate::store::{StoreError, StoreResult};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::fmt::{Debug, Formatter};

type Subscriber = Box<dyn FnMut(&StoreChange) + Send>;

/// Ordered in-memory collection of lists.
pub struct TaskStore {
    lists: Vec<TaskList>,
    next_list_key: u64,
    version: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for TaskStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("lists", &self.lists)
            .field("next_list_key", &self.next_list_key)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            lists: Vec::new(),
            next_list_key: 1,
            version: 0,
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Creates a store over already validated lists.
    ///
    /// The list counter resumes after the highest existing key. Returns
    /// `None` when that key leaves no room for another list.
    pub(crate) fn from_lists(lists: Vec<TaskList>) -> Option<Self> {
        let next_list_key = key_after(lists.iter().map(|list| list.key().get()).max())?;
        Some(Self {
            lists,
            next_list_key,
            ..Self::new()
        })
    }

    /// Number of committed mutations since construction.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Borrowed view of every list in display order.
    pub fn lists(&self) -> &[TaskList] {
        &self.lists
    }

    /// Owned copy of every list in display order.
    pub fn snapshot(&self) -> Vec<TaskList> {
        self.lists.clone()
    }

    /// Appends a new list with no date and no tasks.
    ///
    /// # Errors
    /// - `InvalidInput(BlankTitle)` when `title` is blank after trim; the
    ///   store is left untouched.
    /// - `ListKeysExhausted` when the list counter cannot advance.
    pub fn create_list(&mut self, title: impl Into<String>) -> StoreResult<ListId> {
        let title = title.into();
        if !is_present(&title) {
            debug!("event=list_create module=store status=rejected reason=blank_title");
            return Err(InputError::BlankTitle.into());
        }

        let list_id = ListId::new(self.next_list_key);
        self.next_list_key = key_after(Some(self.next_list_key)).ok_or_else(|| {
            warn!("event=list_create module=store status=rejected reason=keys_exhausted");
            StoreError::ListKeysExhausted
        })?;
        self.lists.push(TaskList::new(list_id, title));
        self.commit(StoreEvent::ListCreated { list_id });
        Ok(list_id)
    }

    /// Removes a list together with its tasks.
    ///
    /// Unknown ids are a no-op and publish nothing.
    pub fn delete_list(&mut self, list_id: ListId) {
        let Some(index) = self.position(list_id) else {
            debug!("event=list_delete module=store status=noop list_id={list_id}");
            return;
        };
        let removed = self.lists.remove(index);
        self.commit(StoreEvent::ListDeleted {
            list_id,
            task_count: removed.task_count(),
        });
    }

    /// Overwrites the date of one list.
    ///
    /// # Errors
    /// - `ListNotFound` when `list_id` does not resolve.
    /// - `InvalidInput(InvalidDate)` when `iso_date` is not `YYYY-MM-DD`.
    pub fn set_list_date(&mut self, list_id: ListId, iso_date: &str) -> StoreResult<()> {
        let index = self
            .position(list_id)
            .ok_or(StoreError::ListNotFound(list_id))?;
        let date = ListDate::parse(iso_date)?;
        self.lists[index].set_date(date);
        self.commit(StoreEvent::ListDateSet { list_id });
        Ok(())
    }

    /// Sets the date of one list from a picked calendar day.
    pub fn set_list_date_from(&mut self, list_id: ListId, picked: NaiveDate) -> StoreResult<()> {
        let date = ListDate::from_naive(picked);
        self.set_list_date(list_id, date.as_str())
    }

    /// Looks up one list by key.
    pub fn find_list(&self, list_id: ListId) -> StoreResult<&TaskList> {
        self.lists
            .iter()
            .find(|list| list.key() == list_id)
            .ok_or(StoreError::ListNotFound(list_id))
    }

    /// Returns copies of the lists whose date equals `iso_date` exactly.
    ///
    /// Unset dates compare as `""`. Relative order is preserved.
    pub fn lists_by_date(&self, iso_date: &str) -> Vec<TaskList> {
        self.lists
            .iter()
            .filter(|list| list.date() == iso_date)
            .cloned()
            .collect()
    }

    /// Appends a task to one list.
    ///
    /// # Errors
    /// - `ListNotFound` when `list_id` does not resolve (checked first).
    /// - `InvalidInput(BlankText)` when `text` is blank after trim.
    /// - `TaskKeysExhausted` when the list's task counter cannot advance.
    pub fn add_task(&mut self, list_id: ListId, text: impl Into<String>) -> StoreResult<TaskId> {
        let index = self
            .position(list_id)
            .ok_or(StoreError::ListNotFound(list_id))?;
        let text = text.into();
        if !is_present(&text) {
            debug!("event=task_add module=store status=rejected reason=blank_text list_id={list_id}");
            return Err(InputError::BlankText.into());
        }

        let task_id = self.lists[index].push_task(text).ok_or_else(|| {
            warn!(
                "event=task_add module=store status=rejected reason=keys_exhausted list_id={list_id}"
            );
            StoreError::TaskKeysExhausted(list_id)
        })?;
        self.commit(StoreEvent::TaskCreated { list_id, task_id });
        Ok(task_id)
    }

    /// Removes one task. No-op when either key is absent.
    pub fn delete_task(&mut self, list_id: ListId, task_id: TaskId) {
        let removed = match self.position(list_id) {
            Some(index) => self.lists[index].remove_task(task_id),
            None => false,
        };
        if !removed {
            debug!(
                "event=task_delete module=store status=noop list_id={list_id} task_id={task_id}"
            );
            return;
        }
        self.commit(StoreEvent::TaskDeleted { list_id, task_id });
    }

    /// Flips the completion flag of one task and returns the new value.
    ///
    /// The list is resolved by `list_id` first; the task is then resolved
    /// inside that list's own sequence.
    ///
    /// # Errors
    /// - `ListNotFound` / `TaskNotFound` when a key does not resolve.
    pub fn toggle_task(&mut self, list_id: ListId, task_id: TaskId) -> StoreResult<bool> {
        let index = self
            .position(list_id)
            .ok_or(StoreError::ListNotFound(list_id))?;
        let task = self.lists[index]
            .find_task_mut(task_id)
            .ok_or(StoreError::TaskNotFound { list_id, task_id })?;
        let completed = task.toggle();
        self.commit(StoreEvent::TaskToggled {
            list_id,
            task_id,
            completed,
        });
        Ok(completed)
    }

    /// Registers a callback invoked after every committed mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription; returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn position(&self, list_id: ListId) -> Option<usize> {
        self.lists.iter().position(|list| list.key() == list_id)
    }

    fn commit(&mut self, event: StoreEvent) {
        self.version += 1;
        info!(
            "event={} module=store status=ok list_id={} version={}",
            event.name(),
            event.list_id(),
            self.version
        );
        let change = StoreChange {
            version: self.version,
            event,
        };
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&change);
        }
    }
}
