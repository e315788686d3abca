//! HTTP route handlers for the relay.
//!
//! # Route Structure
//!
//! ```text
//! POST /           - Relay an event to Slack (echoes the body on success)
//! GET  /health     - Liveness check
//! GET  /_/health   - Liveness check (function watchdog path)
//! ```

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::instrument;

use crate::error::RelayError;
use crate::state::AppState;

/// Create the relay router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(relay_event))
        .route("/health", get(health))
        .route("/_/health", get(health))
        .with_state(state)
}

/// Relay one event.
///
/// Responds `200` with the exact request bytes once Slack accepts the
/// message, keeping the request's `Content-Type`.
#[instrument(skip_all)]
async fn relay_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, RelayError> {
    let echoed = state.relay().invoke(body).await?;

    let mut response = (StatusCode::OK, echoed).into_response();
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        response
            .headers_mut()
            .insert(CONTENT_TYPE, content_type.clone());
    }
    Ok(response)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not contact Slack.
async fn health() -> &'static str {
    "ok"
}
