//! Core domain logic for tidylist.
//! This crate is the single source of truth for list/task invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod notify;
pub mod seed;
pub mod service;
pub mod store;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::date::ListDate;
pub use model::list::{ListId, TaskList};
pub use model::task::{Task, TaskId};
pub use model::InputError;
pub use notify::channels::{ChannelError, LogChannel, MemoryChannel, NotifyChannel};
pub use notify::registration::{
    register_for_notifications, DeviceKind, FixedPermissions, PermissionGateway,
    PermissionStatus, Registration,
};
pub use notify::{Notification, Notifier, CREATED_TITLE};
pub use seed::{
    bundled_store, load_seed_file, parse_seed, store_from_config, store_from_seed, SeedError,
    SeedList, SeedResult, SeedTask,
};
pub use service::calendar_service::{CalendarView, DateSelection};
pub use store::events::{StoreChange, StoreEvent, SubscriptionId};
pub use store::task_store::TaskStore;
pub use store::{StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
