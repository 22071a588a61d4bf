//! Notification delivery channels.

use crate::notify::Notification;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, PoisonError};

/// Delivery failure reported by one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// Channel cannot deliver right now (no device, no permission).
    Unavailable(String),
    /// Channel refused this notification.
    Rejected(String),
}

impl Display for ChannelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "channel unavailable: {reason}"),
            Self::Rejected(reason) => write!(f, "notification rejected: {reason}"),
        }
    }
}

impl Error for ChannelError {}

/// One destination for notifications.
pub trait NotifyChannel: Send + Sync {
    /// Stable channel name used in log lines.
    fn name(&self) -> &'static str;

    fn deliver(&self, notification: &Notification) -> Result<(), ChannelError>;
}

/// Writes notifications to the core log.
#[derive(Debug, Default)]
pub struct LogChannel;

impl NotifyChannel for LogChannel {
    fn name(&self) -> &'static str {
        "log"
    }

    fn deliver(&self, notification: &Notification) -> Result<(), ChannelError> {
        info!(
            "event=notification_delivered module=notify status=ok channel=log title_len={}",
            notification.title.len()
        );
        Ok(())
    }
}

/// Keeps every delivered notification in memory.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    delivered: Mutex<Vec<Notification>>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything delivered so far.
    pub fn deliveries(&self) -> Vec<Notification> {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NotifyChannel for MemoryChannel {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn deliver(&self, notification: &Notification) -> Result<(), ChannelError> {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
        Ok(())
    }
}
