//! Error types for the chat session core.

use thiserror::Error;

/// Session core error type.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Invalid configuration or unsupported values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The responder reported a failure.
    #[error("response generation failed: {0}")]
    Simulator(String),
    /// The responder task panicked.
    #[error("response generation panicked")]
    SimulatorPanicked,
    /// The responder task was cancelled before it produced a reply.
    #[error("response generation was cancelled")]
    SimulatorCancelled,
}

impl SessionError {
    /// Whether this error comes from the response step and should be absorbed
    /// into a fallback transcript entry.
    #[must_use]
    pub const fn is_simulator_failure(&self) -> bool {
        matches!(
            self,
            Self::Simulator(_) | Self::SimulatorPanicked | Self::SimulatorCancelled
        )
    }
}

impl From<tokio::task::JoinError> for SessionError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            Self::SimulatorPanicked
        } else {
            Self::SimulatorCancelled
        }
    }
}

/// Convenience result alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
