//! Ephemeral notifications and the stub actions that post them.

pub mod scheduler;
pub mod stubs;

pub use scheduler::{Notification, NotificationKind, NotificationScheduler};
pub use stubs::{AuthStub, StubAction, UNKNOWN_ACTION_MESSAGE, action_message};
