//! Startup helpers for the chat clone server.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;

use crate::server::{self, AppState};
use crate::session::SessionConfig;

/// Run the server until Ctrl+C.
///
/// # Returns
/// `ExitCode::SUCCESS` on graceful shutdown, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting chat clone v{}", env!("CARGO_PKG_VERSION"));

    let state = match initialize() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to create state: {e:#}");
            return ExitCode::from(1);
        }
    };

    let port = get_port();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = rt.block_on(server::run_server_with_shutdown(state, port, shutdown_signal())) {
        tracing::error!("Server error: {e:#}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Initialize application state from `CHAT_CLONE_*` variables without
/// starting the server.
///
/// # Errors
/// Returns an error if the configuration is invalid.
pub fn initialize() -> anyhow::Result<Arc<AppState>> {
    let config = SessionConfig::from_env().context("invalid CHAT_CLONE_* configuration")?;
    tracing::info!(
        min_delay_ms = config.simulator.min_delay_ms,
        jitter_ms = config.simulator.jitter_ms,
        "Response simulator configured"
    );
    AppState::new(&config).context("failed to create session")
}

/// Get configured server port.
#[must_use]
pub fn get_port() -> u16 {
    std::env::var("CHAT_CLONE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(server::DEFAULT_PORT)
}

/// Completes on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Ctrl+C handler failed: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
