//! Outbound change events and the bus that fans them out.
//!
//! The session core never renders anything. Every observable change is
//! published as a [`SessionEvent`] on a tokio broadcast channel; renderers
//! (the HTTP/SSE adapter, tests) subscribe and draw what they need.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::session::controller::SessionState;
use crate::session::notify::scheduler::Notification;
use crate::session::transcript::entry::ChatEntry;

/// A change published by the session core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Fired after every transcript append, with the full history.
    TranscriptChanged(Vec<ChatEntry>),
    /// Fired on every `Idle`/`AwaitingResponse` transition.
    SessionStateChanged(SessionState),
    /// Fired when the typing indicator appears or disappears.
    PendingIndicatorChanged(bool),
    /// Fired on post, cancel and expiry, with the current active set.
    NotificationsChanged(Vec<Notification>),
}

impl SessionEvent {
    /// Event name used by the SSE adapter.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TranscriptChanged(_) => "transcript_changed",
            Self::SessionStateChanged(_) => "session_state_changed",
            Self::PendingIndicatorChanged(_) => "pending_indicator_changed",
            Self::NotificationsChanged(_) => "notifications_changed",
        }
    }
}

/// Cloneable publisher handle over a broadcast channel.
#[derive(Clone, Debug)]
pub struct EventBus {
    tx: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    /// Create a bus retaining at most `capacity` unread events per subscriber.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish an event. Having no subscriber is not an error.
    pub fn emit(&self, event: SessionEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("No event subscribers");
        }
    }

    /// Subscribe to events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
