//! Chat session core.
//!
//! The session is an event-emitting state machine with no rendering logic,
//! organized into:
//! - `core`: configuration, errors and identifiers
//! - `transcript`: chat entries and the append-only transcript
//! - `simulator`: clock/randomness ports and the canned-reply responder
//! - `notify`: self-expiring notifications and stub action texts
//! - `events`: outbound change events and their broadcast bus
//! - `controller`: the submit/respond state machine tying it all together

pub mod controller;
pub mod core;
pub mod events;
pub mod notify;
pub mod simulator;
pub mod transcript;

// Re-export commonly used types for convenience
pub use controller::{
    CycleHandle, FALLBACK_REPLY, PendingIndicator, SEND_FAILED_MESSAGE, SessionController,
    SessionSnapshot, SessionState,
};
pub use self::core::{
    EntryId, NotificationConfig, NotificationId, SessionConfig, SessionError, SessionId,
    SessionResult, SimulatorConfig,
};
pub use events::{EventBus, SessionEvent};
pub use notify::{AuthStub, Notification, NotificationKind, NotificationScheduler, StubAction};
pub use simulator::{
    Clock, DEFAULT_RESPONSES, FixedRandom, RandomSource, ReplyFuture, Responder,
    ResponseSimulator, ThreadRandom, TokioClock,
};
pub use transcript::{ChatEntry, ChatRole, Transcript};
