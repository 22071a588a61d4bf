//! Environment-driven core configuration.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Unknown device kinds fall back to `DeviceKind::Physical`.

use crate::notify::registration::DeviceKind;
use std::path::PathBuf;

/// Optional JSON seed file replacing the bundled dataset.
pub const ENV_SEED_PATH: &str = "TIDYLIST_SEED_PATH";
/// `true`/`1` disables notification delivery.
pub const ENV_NOTIFY_DISABLED: &str = "TIDYLIST_NOTIFY_DISABLED";
/// `physical` or `simulator`.
pub const ENV_DEVICE_KIND: &str = "TIDYLIST_DEVICE_KIND";

/// Process-level settings for store bootstrap and notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub seed_path: Option<PathBuf>,
    pub notifications_enabled: bool,
    pub device_kind: DeviceKind,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            notifications_enabled: true,
            device_kind: DeviceKind::Physical,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let seed_path = read(ENV_SEED_PATH).map(PathBuf::from);
        let notifications_enabled = !read(ENV_NOTIFY_DISABLED)
            .map(|value| value.eq_ignore_ascii_case("true") || value == "1")
            .unwrap_or(false);
        let device_kind = match read(ENV_DEVICE_KIND) {
            Some(value) if value.eq_ignore_ascii_case("simulator") => DeviceKind::Simulator,
            _ => DeviceKind::Physical,
        };

        Self {
            seed_path,
            notifications_enabled,
            device_kind,
        }
    }
}
