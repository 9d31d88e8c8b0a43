//! Core session types: configuration, errors and identifiers.

pub mod config;
pub mod errors;
pub mod ids;

pub use config::{NotificationConfig, SessionConfig, SimulatorConfig};
pub use errors::{SessionError, SessionResult};
pub use ids::{EntryId, NotificationId, Sequence, SessionId};
