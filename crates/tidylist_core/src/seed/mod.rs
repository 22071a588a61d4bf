//! Seed data bootstrap.
//!
//! # Responsibility
//! - Parse the static list dataset the store starts from.
//! - Validate seed records against model invariants before building a store.
//!
//! # Invariants
//! - A seed with duplicate list keys, duplicate task keys within one list,
//!   blank text or a malformed date is rejected as a whole.
//! - A seed whose highest list key, or highest task key in any list, leaves
//!   no room for the next key is rejected.
//! - Both a bare list array and the `{ "taskData": [...] }` envelope are
//!   accepted.

use crate::config::CoreConfig;
use crate::model::date::ListDate;
use crate::model::list::{ListId, TaskList};
use crate::model::task::{Task, TaskId};
use crate::model::{is_present, InputError};
use crate::store::task_store::TaskStore;
use log::{info, warn};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Dataset compiled into the crate and used when no seed file is configured.
pub const BUNDLED_SEED: &str = include_str!("../../assets/seed.json");

pub type SeedResult<T> = Result<T, SeedError>;

/// Seed loading and validation failures.
#[derive(Debug)]
pub enum SeedError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    DuplicateListKey(ListId),
    DuplicateTaskKey {
        list_id: ListId,
        task_id: TaskId,
    },
    InvalidList {
        list_id: ListId,
        source: InputError,
    },
    InvalidTask {
        list_id: ListId,
        task_id: TaskId,
        source: InputError,
    },
    /// The highest list key leaves no room for new lists.
    ListKeyOverflow,
    /// The highest task key in this list leaves no room for new tasks.
    TaskKeyOverflow(ListId),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed file `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid seed json: {err}"),
            Self::DuplicateListKey(id) => write!(f, "duplicate list key in seed: {id}"),
            Self::DuplicateTaskKey { list_id, task_id } => {
                write!(f, "duplicate task key {task_id} in seed list {list_id}")
            }
            Self::InvalidList { list_id, source } => {
                write!(f, "invalid seed list {list_id}: {source}")
            }
            Self::InvalidTask {
                list_id,
                task_id,
                source,
            } => write!(f, "invalid seed task {task_id} in list {list_id}: {source}"),
            Self::ListKeyOverflow => write!(f, "seed list keys leave no room for new lists"),
            Self::TaskKeyOverflow(id) => {
                write!(f, "seed task keys in list {id} leave no room for new tasks")
            }
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidList { source, .. } | Self::InvalidTask { source, .. } => Some(source),
            Self::DuplicateListKey(_)
            | Self::DuplicateTaskKey { .. }
            | Self::ListKeyOverflow
            | Self::TaskKeyOverflow(_) => None,
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// One list record as stored in seed data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedList {
    pub key: u64,
    pub title: String,
    /// `""` means unset.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tasks: Option<Vec<SeedTask>>,
}

/// One task record as stored in seed data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedTask {
    pub key: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedDocument {
    Envelope {
        #[serde(rename = "taskData")]
        task_data: Vec<SeedList>,
    },
    Lists(Vec<SeedList>),
}

/// Parses seed JSON into raw records.
pub fn parse_seed(json: &str) -> SeedResult<Vec<SeedList>> {
    let document: SeedDocument = serde_json::from_str(json)?;
    Ok(match document {
        SeedDocument::Envelope { task_data } => task_data,
        SeedDocument::Lists(lists) => lists,
    })
}

/// Reads and parses a seed file.
pub fn load_seed_file(path: &Path) -> SeedResult<Vec<SeedList>> {
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&json)
}

/// Validates raw records and builds a store from them.
pub fn store_from_seed(records: Vec<SeedList>) -> SeedResult<TaskStore> {
    let mut seen = BTreeSet::new();
    let mut lists = Vec::with_capacity(records.len());
    for record in records {
        let list_id = ListId::new(record.key);
        if !seen.insert(list_id) {
            return Err(SeedError::DuplicateListKey(list_id));
        }
        lists.push(seed_list(list_id, record)?);
    }

    let task_count: usize = lists.iter().map(TaskList::task_count).sum();
    let list_count = lists.len();
    let store = TaskStore::from_lists(lists).ok_or(SeedError::ListKeyOverflow)?;
    info!("event=seed_load module=seed status=ok lists={list_count} tasks={task_count}");
    Ok(store)
}

/// Builds a store from the compiled-in dataset.
pub fn bundled_store() -> SeedResult<TaskStore> {
    store_from_seed(parse_seed(BUNDLED_SEED)?)
}

/// Builds a store from the configured seed file, or the bundled dataset.
pub fn store_from_config(config: &CoreConfig) -> SeedResult<TaskStore> {
    match config.seed_path.as_deref() {
        Some(path) => store_from_seed(load_seed_file(path).map_err(|err| {
            warn!("event=seed_load module=seed status=error source=file");
            err
        })?),
        None => bundled_store(),
    }
}

fn seed_list(list_id: ListId, record: SeedList) -> SeedResult<TaskList> {
    let invalid = |source| SeedError::InvalidList { list_id, source };
    if !is_present(&record.title) {
        return Err(invalid(InputError::BlankTitle));
    }
    let date = if record.date.is_empty() {
        None
    } else {
        Some(ListDate::parse(&record.date).map_err(invalid)?)
    };

    let tasks = match record.tasks {
        Some(raw_tasks) => Some(seed_tasks(list_id, raw_tasks)?),
        None => None,
    };

    TaskList::from_parts(list_id, record.title, date, tasks)
        .ok_or(SeedError::TaskKeyOverflow(list_id))
}

fn seed_tasks(list_id: ListId, records: Vec<SeedTask>) -> SeedResult<Vec<Task>> {
    let mut seen = BTreeSet::new();
    records
        .into_iter()
        .map(|record| {
            let task_id = TaskId::new(record.key);
            if !seen.insert(task_id) {
                return Err(SeedError::DuplicateTaskKey { list_id, task_id });
            }
            if !is_present(&record.text) {
                return Err(SeedError::InvalidTask {
                    list_id,
                    task_id,
                    source: InputError::BlankText,
                });
            }
            Ok(Task::new(task_id, record.text, record.completed))
        })
        .collect()
}
