//! Notification permission registration.
//!
//! The outcome is advisory: it selects an alert for the user and never
//! touches store state.

use log::{info, warn};

/// Device the app is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Physical,
    Simulator,
}

/// Notification permission state reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

/// Platform permission prompt.
pub trait PermissionGateway {
    /// Current status without prompting.
    fn current(&self) -> PermissionStatus;

    /// Prompts the user and returns the resulting status.
    fn request(&self) -> PermissionStatus;
}

/// Gateway with a fixed answer, for hosts without a permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPermissions(pub PermissionStatus);

impl PermissionGateway for FixedPermissions {
    fn current(&self) -> PermissionStatus {
        self.0
    }

    fn request(&self) -> PermissionStatus {
        self.0
    }
}

pub const ALERT_PERMISSION_DENIED: &str = "Failed to get push token for push notification!";
pub const ALERT_NOT_A_DEVICE: &str = "Must use physical device for Push Notifications";

/// Result of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Registered,
    /// Registration failed; the text is shown to the user as an alert.
    Alert(&'static str),
}

/// Requests notification permission when it has not been granted yet.
pub fn register_for_notifications(
    device: DeviceKind,
    gateway: &dyn PermissionGateway,
) -> Registration {
    if device != DeviceKind::Physical {
        warn!("event=notify_register module=notify status=error reason=not_a_device");
        return Registration::Alert(ALERT_NOT_A_DEVICE);
    }

    let status = match gateway.current() {
        PermissionStatus::Granted => PermissionStatus::Granted,
        _ => gateway.request(),
    };
    if status != PermissionStatus::Granted {
        warn!("event=notify_register module=notify status=error reason=permission_denied");
        return Registration::Alert(ALERT_PERMISSION_DENIED);
    }

    info!("event=notify_register module=notify status=ok");
    Registration::Registered
}
