//! Fire-and-forget notifications for list/task creation.
//!
//! # Responsibility
//! - Turn committed creation events into user-facing notifications.
//! - Deliver them off the mutation path on a dedicated worker thread.
//!
//! # Invariants
//! - `Notifier::notify` never blocks on delivery and never reports failure.
//! - Channel errors are logged and dropped; they never reach the store.

pub mod channels;
pub mod registration;

use crate::config::CoreConfig;
use crate::store::events::SubscriptionId;
use crate::store::task_store::TaskStore;
use channels::{LogChannel, NotifyChannel};
use log::{debug, error, warn};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Title of the notification requested after every list or task creation.
pub const CREATED_TITLE: &str = "New List/Task Created";

const WORKER_THREAD_NAME: &str = "tidylist-notify";
const FLUSH_TIMEOUT: Duration = Duration::from_secs(2);

/// Title-only notification payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
}

impl Notification {
    pub fn created() -> Self {
        Self {
            title: CREATED_TITLE.to_string(),
        }
    }
}

enum WorkerMessage {
    Deliver(Notification),
    Flush(Sender<()>),
    Shutdown,
}

/// Dispatches notifications to every channel on a background worker.
pub struct Notifier {
    sender: Option<Sender<WorkerMessage>>,
    worker: Option<JoinHandle<()>>,
    channel_count: usize,
}

impl Notifier {
    /// Starts a worker delivering to `channels`.
    ///
    /// Falls back to a disabled notifier when the worker thread cannot be
    /// spawned.
    pub fn with_channels(channels: Vec<Arc<dyn NotifyChannel>>) -> Self {
        let channel_count = channels.len();
        let (sender, receiver) = mpsc::channel();
        let spawned = std::thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || run_worker(channels, receiver));

        match spawned {
            Ok(worker) => Self {
                sender: Some(sender),
                worker: Some(worker),
                channel_count,
            },
            Err(err) => {
                error!("event=notifier_start module=notify status=error error={err}");
                Self::disabled()
            }
        }
    }

    /// Notifier that drops everything.
    pub fn disabled() -> Self {
        Self {
            sender: None,
            worker: None,
            channel_count: 0,
        }
    }

    /// Builds the notifier described by `config`.
    pub fn from_config(config: &CoreConfig) -> Self {
        if !config.notifications_enabled {
            debug!("event=notifier_start module=notify status=disabled");
            return Self::disabled();
        }
        let channels: Vec<Arc<dyn NotifyChannel>> = vec![Arc::new(LogChannel)];
        Self::with_channels(channels)
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Queues one notification for delivery.
    pub fn notify(&self, notification: Notification) {
        if let Some(sender) = &self.sender {
            queue(sender, notification);
        }
    }

    /// Subscribes to `store` and requests a notification for every creation.
    pub fn attach(&self, store: &mut TaskStore) -> SubscriptionId {
        let sender = self.sender.clone();
        store.subscribe(move |change| {
            if !change.event.is_creation() {
                return;
            }
            if let Some(sender) = &sender {
                queue(sender, Notification::created());
            }
        })
    }

    /// Waits until everything queued before this call has been delivered.
    ///
    /// Returns `false` when the worker did not answer in time.
    pub fn flush(&self) -> bool {
        let Some(sender) = &self.sender else {
            return true;
        };
        let (ack_sender, ack_receiver) = mpsc::channel();
        if sender.send(WorkerMessage::Flush(ack_sender)).is_err() {
            return false;
        }
        ack_receiver.recv_timeout(FLUSH_TIMEOUT).is_ok()
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        if let Some(sender) = self.sender.take() {
            let _ = sender.send(WorkerMessage::Shutdown);
        }
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("event=notifier_stop module=notify status=error reason=worker_panicked");
            }
        }
    }
}

fn queue(sender: &Sender<WorkerMessage>, notification: Notification) {
    if sender.send(WorkerMessage::Deliver(notification)).is_err() {
        warn!("event=notify module=notify status=dropped reason=worker_gone");
    }
}

fn run_worker(channels: Vec<Arc<dyn NotifyChannel>>, receiver: Receiver<WorkerMessage>) {
    for message in receiver {
        match message {
            WorkerMessage::Deliver(notification) => {
                for channel in &channels {
                    if let Err(err) = channel.deliver(&notification) {
                        warn!(
                            "event=notification_delivered module=notify status=error channel={} error={err}",
                            channel.name()
                        );
                    }
                }
            }
            WorkerMessage::Flush(ack) => {
                let _ = ack.send(());
            }
            WorkerMessage::Shutdown => break,
        }
    }
}
