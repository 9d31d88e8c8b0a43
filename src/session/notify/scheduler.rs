//! Self-expiring notifications.
//!
//! Each posted notification gets its own one-shot timer task. Removal from
//! the active set goes through `DashMap::remove`, so whichever of expiry or
//! cancel gets there first wins and the other becomes a no-op: expiry logic
//! runs at most once per id and never after a cancel.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tokio::task::AbortHandle;
use tracing::{debug, warn};

use crate::session::core::config::NotificationConfig;
use crate::session::core::ids::{NotificationId, Sequence};
use crate::session::events::{EventBus, SessionEvent};
use crate::session::simulator::ports::Clock;

/// Severity of a notification.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Informational toast (action and auth stubs).
    Info,
    /// Prominent error toast.
    Error,
}

impl NotificationKind {
    /// Stable string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "info" => Ok(Self::Info),
            "error" => Ok(Self::Error),
            _ => Err(value.to_string()),
        }
    }
}

/// An ephemeral message with its own lifetime.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Identifier, increasing with post order.
    pub id: NotificationId,
    /// Severity.
    pub kind: NotificationKind,
    /// User-facing text.
    pub text: String,
    /// When it was posted.
    pub created_at: DateTime<Utc>,
    /// Lifetime in milliseconds.
    pub ttl_ms: u64,
}

#[derive(Debug)]
struct ActiveNotification {
    notification: Notification,
    timer: Option<AbortHandle>,
}

struct SchedulerInner {
    ids: Sequence,
    active: DashMap<NotificationId, ActiveNotification>,
    clock: Arc<dyn Clock>,
    bus: EventBus,
    config: NotificationConfig,
}

impl SchedulerInner {
    fn snapshot(&self) -> Vec<Notification> {
        let mut items: Vec<Notification> = self
            .active
            .iter()
            .map(|entry| entry.value().notification.clone())
            .collect();
        items.sort_by_key(|n| n.id);
        items
    }

    fn publish(&self) {
        self.bus
            .emit(SessionEvent::NotificationsChanged(self.snapshot()));
    }

    fn expire(&self, id: NotificationId) {
        if self.active.remove(&id).is_some() {
            debug!(%id, "Notification expired");
            self.publish();
        }
    }
}

impl Drop for SchedulerInner {
    fn drop(&mut self) {
        for entry in &self.active {
            if let Some(timer) = &entry.value().timer {
                timer.abort();
            }
        }
    }
}

/// Owner of the active notification set.
///
/// Cheap to clone; clones share the same set.
#[derive(Clone)]
pub struct NotificationScheduler {
    inner: Arc<SchedulerInner>,
}

impl fmt::Debug for NotificationScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationScheduler")
            .field("active", &self.inner.active.len())
            .finish_non_exhaustive()
    }
}

impl NotificationScheduler {
    /// Create a scheduler publishing on `bus`.
    #[must_use]
    pub fn new(config: NotificationConfig, clock: Arc<dyn Clock>, bus: EventBus) -> Self {
        Self {
            inner: Arc::new(SchedulerInner {
                ids: Sequence::new(),
                active: DashMap::new(),
                clock,
                bus,
                config,
            }),
        }
    }

    /// Post a notification that expires after `ttl`.
    ///
    /// Outside a tokio runtime no timer can be started; the notification
    /// then stays active until cancelled.
    pub fn post(&self, kind: NotificationKind, text: impl Into<String>, ttl: Duration) -> NotificationId {
        let inner = &self.inner;
        let id: NotificationId = inner.ids.next_id();
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        let notification = Notification {
            id,
            kind,
            text: text.into(),
            created_at: inner.clock.now(),
            ttl_ms,
        };
        inner.active.insert(
            id,
            ActiveNotification {
                notification,
                timer: None,
            },
        );
        debug!(%id, %kind, ttl_ms, "Notification posted");
        inner.publish();

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let sleep = inner.clock.sleep(ttl);
                let weak: Weak<SchedulerInner> = Arc::downgrade(inner);
                let task = handle.spawn(async move {
                    sleep.await;
                    if let Some(inner) = weak.upgrade() {
                        inner.expire(id);
                    }
                });
                // Already gone if the timer fired first; the abort handle is then moot.
                if let Some(mut entry) = inner.active.get_mut(&id) {
                    entry.timer = Some(task.abort_handle());
                }
            }
            Err(err) => {
                warn!(%id, ?err, "No tokio runtime, notification will not expire");
            }
        }

        id
    }

    /// Post an informational notification with the configured info TTL.
    pub fn post_info(&self, text: impl Into<String>) -> NotificationId {
        let ttl = self.inner.config.info_ttl();
        self.post(NotificationKind::Info, text, ttl)
    }

    /// Post an error notification with the configured error TTL.
    pub fn post_error(&self, text: impl Into<String>) -> NotificationId {
        let ttl = self.inner.config.error_ttl();
        self.post(NotificationKind::Error, text, ttl)
    }

    /// Remove a notification immediately.
    ///
    /// Returns `false` if it already expired or never existed.
    pub fn cancel(&self, id: NotificationId) -> bool {
        let Some((_, removed)) = self.inner.active.remove(&id) else {
            return false;
        };
        if let Some(timer) = removed.timer {
            timer.abort();
        }
        debug!(%id, "Notification cancelled");
        self.inner.publish();
        true
    }

    /// Cancel every active notification.
    pub fn clear(&self) {
        let ids: Vec<NotificationId> = self.inner.active.iter().map(|entry| *entry.key()).collect();
        let mut removed_any = false;
        for id in ids {
            if let Some((_, removed)) = self.inner.active.remove(&id) {
                if let Some(timer) = removed.timer {
                    timer.abort();
                }
                removed_any = true;
            }
        }
        if removed_any {
            self.inner.publish();
        }
    }

    /// Currently active notifications, ordered by id.
    #[must_use]
    pub fn active_notifications(&self) -> Vec<Notification> {
        self.inner.snapshot()
    }

    /// Whether `id` is still active.
    #[must_use]
    pub fn is_active(&self, id: NotificationId) -> bool {
        self.inner.active.contains_key(&id)
    }
}
