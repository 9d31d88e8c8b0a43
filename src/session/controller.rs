//! Session controller: the submit/respond state machine.
//!
//! A submission is accepted only from [`SessionState::Idle`]. Accepting is
//! synchronous: the state flips to `AwaitingResponse`, the user entry is
//! appended and the typing indicator is raised before `submit` returns. The
//! reply is then produced on a spawned task whose [`CycleGuard`] puts the
//! controller back to `Idle` on every exit path, including panics and
//! aborts.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, error, info, warn};

use crate::session::core::config::SessionConfig;
use crate::session::core::errors::{SessionError, SessionResult};
use crate::session::core::ids::{NotificationId, SessionId};
use crate::session::events::{EventBus, SessionEvent};
use crate::session::notify::scheduler::{Notification, NotificationScheduler};
use crate::session::notify::stubs::{AuthStub, action_message};
use crate::session::simulator::ports::{Clock, TokioClock};
use crate::session::simulator::responder::{Responder, ResponseSimulator};
use crate::session::transcript::entry::{ChatEntry, ChatRole};
use crate::session::transcript::store::Transcript;

/// Assistant text appended when the responder fails.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Error notification posted when a cycle fails outside the responder.
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// Whether the controller accepts a submission.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Ready for a submission.
    #[default]
    Idle,
    /// A reply is being produced; submissions are dropped.
    AwaitingResponse,
}

/// "Assistant is typing" marker for the cycle in flight.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PendingIndicator {
    /// When the indicator was raised.
    pub created_at: DateTime<Utc>,
}

/// Everything a renderer needs to draw the session from scratch.
#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot {
    /// Session identifier.
    pub session_id: SessionId,
    /// Current state.
    pub state: SessionState,
    /// Whether the typing indicator is shown.
    pub indicator: bool,
    /// Full transcript.
    pub entries: Vec<ChatEntry>,
    /// Active notifications.
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Default)]
struct CycleState {
    state: SessionState,
    indicator: Option<PendingIndicator>,
}

struct ControllerInner {
    session_id: SessionId,
    clock: Arc<dyn Clock>,
    responder: Arc<dyn Responder>,
    transcript: Transcript,
    cycle: Mutex<CycleState>,
    notifications: NotificationScheduler,
    bus: EventBus,
}

impl ControllerInner {
    fn lock_cycle(&self) -> MutexGuard<'_, CycleState> {
        self.cycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn append(&self, role: ChatRole, text: impl Into<String>) -> ChatEntry {
        let entry = self.transcript.append(self.clock.as_ref(), role, text);
        self.bus
            .emit(SessionEvent::TranscriptChanged(self.transcript.entries()));
        entry
    }

    fn set_state(&self, cycle: &mut CycleState, state: SessionState) {
        if cycle.state != state {
            cycle.state = state;
            self.bus.emit(SessionEvent::SessionStateChanged(state));
        }
    }

    fn raise_indicator(&self, cycle: &mut CycleState) {
        cycle.indicator = Some(PendingIndicator {
            created_at: self.clock.now(),
        });
        self.bus.emit(SessionEvent::PendingIndicatorChanged(true));
    }

    fn drop_indicator(&self, cycle: &mut CycleState) {
        if cycle.indicator.take().is_some() {
            self.bus.emit(SessionEvent::PendingIndicatorChanged(false));
        }
    }

    /// Settle a cycle: indicator down, one assistant entry, back to idle.
    fn finish(&self, outcome: SessionResult<String>) {
        let mut cycle = self.lock_cycle();
        self.drop_indicator(&mut cycle);
        let reply = match outcome {
            Ok(reply) => reply,
            Err(err) if err.is_simulator_failure() => {
                warn!(session = %self.session_id, %err, "Response generation failed, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
            Err(err) => {
                error!(session = %self.session_id, %err, "Unexpected responder error, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        };
        self.append(ChatRole::Assistant, reply);
        self.set_state(&mut cycle, SessionState::Idle);
        debug!(session = %self.session_id, "Response cycle settled");
    }
}

/// Releases the session lock when a response cycle ends, however it ends.
///
/// `run` settles the cycle normally. If the guard is dropped before that
/// (task aborted, runtime shut down, panic) the drop path lowers the
/// indicator, returns to idle and posts an error notification.
struct CycleGuard {
    inner: Arc<ControllerInner>,
    reply_task: Option<AbortHandle>,
    settled: bool,
}

impl CycleGuard {
    async fn run(mut self) {
        let responder = Arc::clone(&self.inner.responder);
        // `generate` runs inside the reply task so a fault while building the
        // future is caught like any other responder failure.
        let task = tokio::spawn(async move { responder.generate().await });
        self.reply_task = Some(task.abort_handle());
        let outcome = match task.await {
            Ok(outcome) => outcome,
            Err(join_err) => Err(SessionError::from(join_err)),
        };
        self.reply_task = None;
        self.inner.finish(outcome);
        self.settled = true;
    }
}

impl Drop for CycleGuard {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if let Some(task) = self.reply_task.take() {
            task.abort();
        }
        let inner = &self.inner;
        {
            let mut cycle = inner.lock_cycle();
            inner.drop_indicator(&mut cycle);
            inner.set_state(&mut cycle, SessionState::Idle);
        }
        error!(session = %inner.session_id, "Response cycle ended without settling");
        inner.notifications.post_error(SEND_FAILED_MESSAGE);
    }
}

/// Handle to an accepted submission's response cycle.
#[derive(Debug)]
pub struct CycleHandle {
    task: JoinHandle<()>,
}

impl CycleHandle {
    /// Wait until the cycle has settled (reply, fallback or abort).
    pub async fn wait(self) {
        if let Err(err) = self.task.await {
            debug!(?err, "Response cycle task did not complete");
        }
    }

    /// Abort the cycle. The session still returns to idle.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Whether the cycle task has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Single authority over submissions and their response cycles.
///
/// Cheap to clone; clones drive the same session.
#[derive(Clone)]
pub struct SessionController {
    inner: Arc<ControllerInner>,
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("session_id", &self.inner.session_id)
            .field("state", &self.state())
            .field("entries", &self.inner.transcript.len())
            .finish_non_exhaustive()
    }
}

impl SessionController {
    /// Create a controller with explicit clock and responder.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(
        config: &SessionConfig,
        clock: Arc<dyn Clock>,
        responder: Arc<dyn Responder>,
    ) -> SessionResult<Self> {
        config.validate()?;
        let bus = EventBus::new(config.event_buffer);
        let notifications =
            NotificationScheduler::new(config.notifications.clone(), Arc::clone(&clock), bus.clone());
        let session_id = SessionId::new();
        info!(session = %session_id, "Chat session created");

        Ok(Self {
            inner: Arc::new(ControllerInner {
                session_id,
                clock,
                responder,
                transcript: Transcript::new(),
                cycle: Mutex::new(CycleState::default()),
                notifications,
                bus,
            }),
        })
    }

    /// Create a controller backed by the response simulator, the tokio clock
    /// and the thread RNG.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn with_defaults(config: &SessionConfig) -> SessionResult<Self> {
        let clock: Arc<dyn Clock> = Arc::new(TokioClock);
        let simulator = ResponseSimulator::with_defaults(config.simulator.clone());
        Self::new(config, clock, Arc::new(simulator))
    }

    /// Submit user text.
    ///
    /// Returns `None` without any effect when the trimmed text is empty or a
    /// reply is already pending. Busy submissions are dropped, not queued.
    ///
    /// Must be called from within a tokio runtime; otherwise nothing is
    /// submitted and an error notification is posted instead.
    pub fn submit(&self, raw_text: &str) -> Option<CycleHandle> {
        let text = raw_text.trim();
        if text.is_empty() {
            debug!("Ignoring empty submission");
            return None;
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            error!(session = %self.inner.session_id, "Cannot start a response cycle outside a tokio runtime");
            self.inner.notifications.post_error(SEND_FAILED_MESSAGE);
            return None;
        };

        let inner = &self.inner;
        {
            let mut cycle = inner.lock_cycle();
            if cycle.state != SessionState::Idle {
                debug!(session = %inner.session_id, "Ignoring submission while awaiting a response");
                return None;
            }
            inner.set_state(&mut cycle, SessionState::AwaitingResponse);
            let entry = inner.append(ChatRole::User, text);
            inner.raise_indicator(&mut cycle);
            info!(session = %inner.session_id, entry = %entry.id(), "Submission accepted");
        }

        let guard = CycleGuard {
            inner: Arc::clone(inner),
            reply_task: None,
            settled: false,
        };
        let task = runtime.spawn(guard.run());
        Some(CycleHandle { task })
    }

    /// Whether `raw_text` would be accepted right now (send-button state).
    #[must_use]
    pub fn can_submit(&self, raw_text: &str) -> bool {
        !raw_text.trim().is_empty() && self.state() == SessionState::Idle
    }

    /// Post the informational notification for a toolbar action.
    pub fn action_stub(&self, action: &str) -> NotificationId {
        info!(action, "Action button clicked");
        self.inner.notifications.post_info(action_message(action))
    }

    /// Post the informational notification for an auth button.
    pub fn auth_stub(&self, kind: AuthStub) -> NotificationId {
        info!(%kind, "Auth button clicked");
        self.inner.notifications.post_info(kind.message())
    }

    /// Remove a notification before it expires.
    pub fn cancel_notification(&self, id: NotificationId) -> bool {
        self.inner.notifications.cancel(id)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.inner.lock_cycle().state
    }

    /// The typing indicator, if a reply is pending.
    #[must_use]
    pub fn pending_indicator(&self) -> Option<PendingIndicator> {
        self.inner.lock_cycle().indicator
    }

    /// Whether the typing indicator is shown.
    #[must_use]
    pub fn is_indicator_present(&self) -> bool {
        self.pending_indicator().is_some()
    }

    /// Transcript snapshot in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<ChatEntry> {
        self.inner.transcript.entries()
    }

    /// Active notifications.
    #[must_use]
    pub fn active_notifications(&self) -> Vec<Notification> {
        self.inner.notifications.active_notifications()
    }

    /// Dismiss every active notification.
    pub fn clear_notifications(&self) {
        self.inner.notifications.clear();
    }

    /// Subscribe to change events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.bus.subscribe()
    }

    /// Session identifier.
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.inner.session_id
    }

    /// Consistent view of the whole session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let cycle = self.inner.lock_cycle();
        SessionSnapshot {
            session_id: self.inner.session_id,
            state: cycle.state,
            indicator: cycle.indicator.is_some(),
            entries: self.inner.transcript.entries(),
            notifications: self.inner.notifications.active_notifications(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::broadcast::error::TryRecvError;

    use super::*;
    use crate::session::notify::scheduler::NotificationKind;
    use crate::session::simulator::ports::{FixedRandom, RandomSource};
    use crate::session::simulator::responder::{DEFAULT_RESPONSES, ReplyFuture};

    struct FailingResponder;

    impl Responder for FailingResponder {
        fn generate(&self) -> ReplyFuture {
            Box::pin(async { Err::<String, _>(SessionError::Simulator("injected fault".to_string())) })
        }
    }

    struct PanickingResponder;

    async fn explode() -> SessionResult<String> {
        panic!("injected panic")
    }

    impl Responder for PanickingResponder {
        fn generate(&self) -> ReplyFuture {
            Box::pin(explode())
        }
    }

    /// Panics while the simulator draws its delay.
    #[derive(Debug)]
    struct BrokenRandom;

    impl RandomSource for BrokenRandom {
        fn below(&self, _upper: u64) -> u64 {
            panic!("random source failed")
        }
    }

    /// Panics before handing out a future.
    struct EagerPanicResponder;

    impl Responder for EagerPanicResponder {
        fn generate(&self) -> ReplyFuture {
            panic!("responder failed before replying")
        }
    }

    struct StalledResponder;

    impl Responder for StalledResponder {
        fn generate(&self) -> ReplyFuture {
            Box::pin(std::future::pending::<SessionResult<String>>())
        }
    }

    fn config() -> SessionConfig {
        SessionConfig::default().with_delay(1000, 2000)
    }

    /// Simulator pinned to corpus index 2 ("Thanks for your message! ...").
    fn pinned_controller() -> SessionController {
        let config = config();
        let clock: Arc<dyn Clock> = Arc::new(TokioClock);
        let simulator =
            ResponseSimulator::new(config.simulator.clone(), Arc::clone(&clock), Arc::new(FixedRandom(2)));
        SessionController::new(&config, clock, Arc::new(simulator)).expect("valid config")
    }

    fn controller_with(responder: impl Responder + 'static) -> SessionController {
        SessionController::new(&config(), Arc::new(TokioClock), Arc::new(responder))
            .expect("valid config")
    }

    fn drain(rx: &mut broadcast::Receiver<SessionEvent>) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty | TryRecvError::Closed) => return events,
                Err(TryRecvError::Lagged(_)) => {}
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_accepts_and_raises_indicator() {
        let session = pinned_controller();
        let handle = session.submit("Hello");
        assert!(handle.is_some());

        let entries = session.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].role(), ChatRole::User);
        assert_eq!(entries[0].text(), "Hello");
        assert_eq!(session.state(), SessionState::AwaitingResponse);
        assert!(session.is_indicator_present());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_completes_cycle() {
        let session = pinned_controller();
        let handle = session.submit("Hello").expect("accepted");
        handle.wait().await;

        let entries = session.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text(), "Hello");
        assert_eq!(entries[1].role(), ChatRole::Assistant);
        assert_eq!(entries[1].text(), DEFAULT_RESPONSES[2]);
        assert!(entries[1].text().starts_with("Thanks for your message!"));
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.is_indicator_present());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_simulated_delay() {
        let session = pinned_controller();
        let started = tokio::time::Instant::now();
        session.submit("Hello").expect("accepted").wait().await;
        // min 1000 ms + FixedRandom(2) % 2000
        assert_eq!(started.elapsed(), Duration::from_millis(1002));
    }

    #[tokio::test(start_paused = true)]
    async fn test_whitespace_submission_is_noop() {
        let session = pinned_controller();
        let mut rx = session.subscribe();

        assert!(session.submit("  ").is_none());
        assert!(session.submit("\n\t").is_none());
        assert!(session.submit("").is_none());

        assert!(session.entries().is_empty());
        assert_eq!(session.state(), SessionState::Idle);
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_is_trimmed() {
        let session = pinned_controller();
        session.submit("  padded text \n").expect("accepted").wait().await;
        assert_eq!(session.entries()[0].text(), "padded text");
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_submissions_are_dropped() {
        let session = pinned_controller();
        let handle = session.submit("A").expect("accepted");
        for text in ["B", "C", "D"] {
            assert!(session.submit(text).is_none());
            assert_eq!(session.entries().len(), 1);
        }
        handle.wait().await;

        let entries = session.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text(), "A");
        assert_eq!(entries[1].role(), ChatRole::Assistant);
        assert!(entries.iter().all(|e| e.text() != "B"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_appends_fallback_without_notification() {
        let session = controller_with(FailingResponder);
        session.submit("Hello").expect("accepted").wait().await;

        let entries = session.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].role(), ChatRole::Assistant);
        assert_eq!(entries[1].text(), FALLBACK_REPLY);
        assert!(session.active_notifications().is_empty());
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.is_indicator_present());
    }

    #[tokio::test(start_paused = true)]
    async fn test_responder_panic_is_absorbed() {
        let session = controller_with(PanickingResponder);
        session.submit("Hello").expect("accepted").wait().await;

        assert_eq!(session.entries()[1].text(), FALLBACK_REPLY);
        assert!(session.active_notifications().is_empty());
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.can_submit("again"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fault_while_requesting_reply_uses_fallback() {
        let config = config();
        let clock: Arc<dyn Clock> = Arc::new(TokioClock);
        let simulator =
            ResponseSimulator::new(config.simulator.clone(), Arc::clone(&clock), Arc::new(BrokenRandom));
        let session = SessionController::new(&config, clock, Arc::new(simulator)).expect("valid config");
        session.submit("Hello").expect("accepted").wait().await;

        let entries = session.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].role(), ChatRole::Assistant);
        assert_eq!(entries[1].text(), FALLBACK_REPLY);
        assert!(session.active_notifications().is_empty());
        assert_eq!(session.state(), SessionState::Idle);

        let session = controller_with(EagerPanicResponder);
        session.submit("Hello").expect("accepted").wait().await;
        assert_eq!(session.entries()[1].text(), FALLBACK_REPLY);
        assert!(session.active_notifications().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_notifications_dismisses_all() {
        let session = pinned_controller();
        session.action_stub("attach");
        session.auth_stub(AuthStub::Signup);
        assert_eq!(session.active_notifications().len(), 2);
        session.clear_notifications();
        assert!(session.active_notifications().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_order_brackets_indicator() {
        let session = pinned_controller();
        let mut rx = session.subscribe();
        session.submit("Hello").expect("accepted").wait().await;

        let events = drain(&mut rx);
        let shape: Vec<String> = events
            .iter()
            .map(|event| match event {
                SessionEvent::TranscriptChanged(entries) => format!("transcript:{}", entries.len()),
                SessionEvent::SessionStateChanged(state) => format!("state:{state:?}"),
                SessionEvent::PendingIndicatorChanged(present) => format!("indicator:{present}"),
                SessionEvent::NotificationsChanged(active) => format!("notifications:{}", active.len()),
            })
            .collect();

        assert_eq!(
            shape,
            vec![
                "state:AwaitingResponse",
                "transcript:1",
                "indicator:true",
                "indicator:false",
                "transcript:2",
                "state:Idle",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_transcript_is_append_only_across_cycles() {
        let session = pinned_controller();
        let mut seen: Vec<ChatEntry> = Vec::new();
        for text in ["one", "two", "three"] {
            session.submit(text).expect("idle between cycles").wait().await;
            let entries = session.entries();
            assert!(entries.len() >= seen.len());
            assert_eq!(&entries[..seen.len()], seen.as_slice());
            seen = entries;
        }
        assert_eq!(seen.len(), 6);
        assert!(seen.windows(2).all(|w| w[0].id() < w[1].id()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_releases_lock_and_reports_error() {
        let session = controller_with(StalledResponder);
        let handle = session.submit("Hello").expect("accepted");
        tokio::task::yield_now().await;
        assert_eq!(session.state(), SessionState::AwaitingResponse);

        handle.abort();
        handle.wait().await;

        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.is_indicator_present());
        assert_eq!(session.entries().len(), 1);
        let active = session.active_notifications();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind, NotificationKind::Error);
        assert_eq!(active[0].text, SEND_FAILED_MESSAGE);
        assert!(session.can_submit("retry"));
    }

    #[test]
    fn test_submit_outside_runtime_reports_error_and_stays_idle() {
        let session = pinned_controller();
        assert!(session.submit("Hello").is_none());
        assert!(session.entries().is_empty());
        assert_eq!(session.state(), SessionState::Idle);
        let active = session.active_notifications();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind, NotificationKind::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_can_submit_tracks_text_and_state() {
        let session = pinned_controller();
        assert!(!session.can_submit("   "));
        assert!(session.can_submit("hi"));
        let handle = session.submit("hi").expect("accepted");
        assert!(!session.can_submit("hi"));
        handle.wait().await;
        assert!(session.can_submit("hi"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stub_actions_post_info_notifications() {
        let session = pinned_controller();
        let attach = session.action_stub("attach");
        let unknown = session.action_stub("teleport");
        let login = session.auth_stub(AuthStub::Login);

        let active = session.active_notifications();
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|n| n.kind == NotificationKind::Info && n.ttl_ms == 3000));
        assert_eq!(active[0].id, attach);
        assert_eq!(active[0].text, "File attachment feature would be implemented here.");
        assert_eq!(active[1].id, unknown);
        assert_eq!(active[1].text, "Feature not implemented yet.");
        assert_eq!(active[2].id, login);

        assert!(session.cancel_notification(unknown));
        tokio::time::sleep(Duration::from_millis(3001)).await;
        assert!(session.active_notifications().is_empty());
        assert!(session.entries().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_reflects_pending_cycle() {
        let session = pinned_controller();
        let handle = session.submit("Hello").expect("accepted");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.session_id, session.session_id());
        assert_eq!(snapshot.state, SessionState::AwaitingResponse);
        assert!(snapshot.indicator);
        assert_eq!(snapshot.entries.len(), 1);
        handle.wait().await;
        assert!(!session.snapshot().indicator);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SessionConfig::default().with_event_buffer(0);
        assert!(SessionController::with_defaults(&config).is_err());
    }
}
