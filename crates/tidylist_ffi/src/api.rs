//! FFI use-case API for the mobile UI.
//!
//! # Responsibility
//! - Expose list, task and calendar screen operations to Dart via FRB.
//! - Own the process-wide session (store, notifier, calendar selection).
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Screens receive plain owned rows, never references into the store.
//! - The task screen re-resolves its list by key on every load.

use log::warn;
use std::sync::{Mutex, OnceLock, PoisonError};
use tidylist_core::{
    bundled_store, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, register_for_notifications, store_from_config, CalendarView, CoreConfig,
    FixedPermissions, ListId, Notifier, PermissionStatus, Registration, TaskId, TaskList,
    TaskStore,
};

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

struct Session {
    config: CoreConfig,
    store: TaskStore,
    calendar: CalendarView,
    // Kept alive for the store subscription it feeds.
    _notifier: Notifier,
}

impl Session {
    fn bootstrap() -> Self {
        let config = CoreConfig::from_env();
        let mut store = store_from_config(&config)
            .or_else(|err| {
                warn!("event=session_init module=ffi status=fallback reason=seed_error error={err}");
                bundled_store()
            })
            .unwrap_or_else(|err| {
                warn!("event=session_init module=ffi status=fallback reason=bundled_seed_error error={err}");
                TaskStore::new()
            });
        let notifier = Notifier::from_config(&config);
        notifier.attach(&mut store);

        Self {
            config,
            store,
            calendar: CalendarView::new(),
            _notifier: notifier,
        }
    }
}

fn with_session<T>(f: impl FnOnce(&mut Session) -> T) -> T {
    let session = SESSION.get_or_init(|| Mutex::new(Session::bootstrap()));
    let mut guard = session.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One row on the list or calendar screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub key: u64,
    pub title: String,
    /// `""` renders as "select date".
    pub date: String,
    pub task_count: u32,
    pub completed_count: u32,
}

/// One row on the task screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub key: u64,
    pub text: String,
    pub completed: bool,
}

/// List screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListScreen {
    pub lists: Vec<ListRow>,
    /// Store version the rows were read at; re-render when it changes.
    pub version: u64,
}

/// Task screen state for one navigated-to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskScreen {
    /// `false` when the list no longer exists.
    pub found: bool,
    pub list: Option<ListRow>,
    /// `None` until the first task is added.
    pub tasks: Option<Vec<TaskRow>>,
    pub version: u64,
}

/// Calendar screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarScreen {
    /// `""` while no day has been pressed.
    pub selected: String,
    pub lists: Vec<ListRow>,
    pub version: u64,
}

/// Generic mutation response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Created key, or the new completion flag as `0|1` for toggles.
    pub value: Option<u64>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, value: Option<u64>) -> Self {
        Self {
            ok: true,
            value,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            value: None,
            message: message.into(),
        }
    }
}

/// Notification registration outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRegistration {
    pub registered: bool,
    /// Alert text to show when registration failed.
    pub alert: Option<String>,
}

/// Loads the list screen.
#[flutter_rust_bridge::frb(sync)]
pub fn list_screen_load() -> ListScreen {
    with_session(|session| ListScreen {
        lists: session.store.lists().iter().map(to_list_row).collect(),
        version: session.store.version(),
    })
}

/// Creates a list from the "Add List" input.
#[flutter_rust_bridge::frb(sync)]
pub fn list_create(title: String) -> ActionResponse {
    with_session(|session| match session.store.create_list(title) {
        Ok(id) => ActionResponse::success("List created.", Some(id.get())),
        Err(err) => ActionResponse::failure(format!("list_create failed: {err}")),
    })
}

/// Deletes a list and its tasks. Unknown keys succeed without effect.
#[flutter_rust_bridge::frb(sync)]
pub fn list_delete(list_key: u64) -> ActionResponse {
    with_session(|session| {
        session.store.delete_list(ListId::new(list_key));
        ActionResponse::success("List deleted.", None)
    })
}

/// Sets a list date picked in the date modal (`YYYY-MM-DD`).
#[flutter_rust_bridge::frb(sync)]
pub fn list_set_date(list_key: u64, iso_date: String) -> ActionResponse {
    with_session(|session| {
        match session
            .store
            .set_list_date(ListId::new(list_key), iso_date.trim())
        {
            Ok(()) => ActionResponse::success("Date set.", None),
            Err(err) => ActionResponse::failure(format!("list_set_date failed: {err}")),
        }
    })
}

/// Loads the task screen for the list key passed through navigation.
#[flutter_rust_bridge::frb(sync)]
pub fn task_screen_load(list_key: u64) -> TaskScreen {
    with_session(|session| {
        let version = session.store.version();
        match session.store.find_list(ListId::new(list_key)) {
            Ok(list) => TaskScreen {
                found: true,
                list: Some(to_list_row(list)),
                tasks: list.tasks().map(|tasks| {
                    tasks
                        .iter()
                        .map(|task| TaskRow {
                            key: task.key().get(),
                            text: task.text().to_string(),
                            completed: task.completed(),
                        })
                        .collect()
                }),
                version,
            },
            Err(_) => TaskScreen {
                found: false,
                list: None,
                tasks: None,
                version,
            },
        }
    })
}

/// Adds a task from the "Add Task" input.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(list_key: u64, text: String) -> ActionResponse {
    with_session(|session| match session.store.add_task(ListId::new(list_key), text) {
        Ok(id) => ActionResponse::success("Task created.", Some(id.get())),
        Err(err) => ActionResponse::failure(format!("task_add failed: {err}")),
    })
}

/// Deletes one task. Unknown keys succeed without effect.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(list_key: u64, task_key: u64) -> ActionResponse {
    with_session(|session| {
        session
            .store
            .delete_task(ListId::new(list_key), TaskId::new(task_key));
        ActionResponse::success("Task deleted.", None)
    })
}

/// Flips the checkbox of one task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(list_key: u64, task_key: u64) -> ActionResponse {
    with_session(|session| {
        match session
            .store
            .toggle_task(ListId::new(list_key), TaskId::new(task_key))
        {
            Ok(completed) => ActionResponse::success("Task toggled.", Some(u64::from(completed))),
            Err(err) => ActionResponse::failure(format!("task_toggle failed: {err}")),
        }
    })
}

/// Selects a calendar day and returns the lists dated on it.
///
/// An invalid date keeps the previous selection.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_select(iso_date: String) -> CalendarScreen {
    with_session(|session| {
        if let Err(err) = session.calendar.select(iso_date.trim()) {
            warn!("event=calendar_select module=ffi status=rejected error={err}");
        }
        calendar_screen(session)
    })
}

/// Returns the calendar screen for the current selection.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_lists() -> CalendarScreen {
    with_session(calendar_screen)
}

/// Current store version, for cheap change polling.
#[flutter_rust_bridge::frb(sync)]
pub fn store_version() -> u64 {
    with_session(|session| session.store.version())
}

/// Runs the notification registration flow.
///
/// `permission_granted` is the answer of the platform permission prompt.
#[flutter_rust_bridge::frb(sync)]
pub fn register_notifications(permission_granted: bool) -> NotificationRegistration {
    let status = if permission_granted {
        PermissionStatus::Granted
    } else {
        PermissionStatus::Denied
    };
    let device = with_session(|session| session.config.device_kind);
    match register_for_notifications(device, &FixedPermissions(status)) {
        Registration::Registered => NotificationRegistration {
            registered: true,
            alert: None,
        },
        Registration::Alert(text) => NotificationRegistration {
            registered: false,
            alert: Some(text.to_string()),
        },
    }
}

fn calendar_screen(session: &mut Session) -> CalendarScreen {
    let selected = session.calendar.selection().as_str().to_string();
    let lists = session
        .calendar
        .lists(&session.store)
        .iter()
        .map(to_list_row)
        .collect();
    CalendarScreen {
        selected,
        lists,
        version: session.store.version(),
    }
}

fn to_list_row(list: &TaskList) -> ListRow {
    let completed = list
        .tasks()
        .map_or(0, |tasks| tasks.iter().filter(|task| task.completed()).count());
    ListRow {
        key: list.key().get(),
        title: list.title().to_string(),
        date: list.date().to_string(),
        task_count: saturating_u32(list.task_count()),
        completed_count: saturating_u32(completed),
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
