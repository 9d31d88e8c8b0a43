//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::session::{SessionConfig, SessionController, SessionResult};

/// Shared application state.
pub struct AppState {
    /// The single chat session served by this process.
    pub session: SessionController,
}

impl AppState {
    /// Create application state with a simulator-backed session.
    ///
    /// # Errors
    /// Returns an error if the session configuration is invalid.
    pub fn new(config: &SessionConfig) -> SessionResult<Arc<Self>> {
        let session = SessionController::with_defaults(config)?;
        Ok(Self::with_session(session))
    }

    /// Wrap an existing session.
    #[must_use]
    pub fn with_session(session: SessionController) -> Arc<Self> {
        Arc::new(Self { session })
    }
}
