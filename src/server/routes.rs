//! HTTP route handlers for the chat session API.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use futures::Stream;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::error::RecvError;

use crate::session::{AuthStub, NotificationId, SessionSnapshot, SessionState};

use super::state::AppState;

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/session", get(session_snapshot))
        .route("/api/submit", post(submit_message))
        .route("/api/actions/{name}", post(action_stub))
        .route("/api/auth/{kind}", post(auth_stub))
        .route("/api/notifications/{id}", delete(cancel_notification))
        .route("/api/events", get(session_events))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "chat-clone",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Full session snapshot.
async fn session_snapshot(State(state): State<Arc<AppState>>) -> Json<SessionSnapshot> {
    Json(state.session.snapshot())
}

/// Submit request.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Raw text from the input field.
    pub text: String,
}

/// Submit response.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// Whether a response cycle was started.
    pub accepted: bool,
    /// Session state after the call.
    pub state: SessionState,
}

/// Handle a submission. Ignored submissions are not errors.
async fn submit_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitRequest>,
) -> (StatusCode, Json<SubmitResponse>) {
    let accepted = state.session.submit(&request.text).is_some();
    let status = if accepted {
        StatusCode::ACCEPTED
    } else {
        StatusCode::OK
    };
    (
        status,
        Json(SubmitResponse {
            accepted,
            state: state.session.state(),
        }),
    )
}

/// Response for endpoints that post a notification.
#[derive(Debug, Serialize)]
pub struct NotificationPosted {
    /// Identifier of the posted notification.
    pub notification_id: NotificationId,
}

/// Handle a toolbar action button.
async fn action_stub(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<NotificationPosted> {
    Json(NotificationPosted {
        notification_id: state.session.action_stub(&name),
    })
}

/// Handle a login/signup button.
async fn auth_stub(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Json<NotificationPosted>, (StatusCode, String)> {
    let kind: AuthStub = kind
        .parse()
        .map_err(|k| (StatusCode::BAD_REQUEST, format!("Unknown auth action: {k}")))?;
    Ok(Json(NotificationPosted {
        notification_id: state.session.auth_stub(kind),
    }))
}

/// Cancel response.
#[derive(Debug, Serialize)]
pub struct CancelResponse {
    /// Whether the notification was still active.
    pub cancelled: bool,
}

/// Dismiss a notification before it expires.
async fn cancel_notification(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Json<CancelResponse> {
    Json(CancelResponse {
        cancelled: state
            .session
            .cancel_notification(NotificationId::from_raw(id)),
    })
}

/// Stream session events as server-sent events.
async fn session_events(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.session.subscribe();
    let stream = futures::stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => match Event::default().event(event.name()).json_data(&event) {
                    Ok(sse) => return Some((Ok(sse), rx)),
                    Err(err) => tracing::warn!(%err, "Failed to encode session event"),
                },
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "SSE subscriber lagged behind");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}
