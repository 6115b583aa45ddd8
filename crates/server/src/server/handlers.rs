//! Axum request handlers for all service endpoints.

use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, Sse},
        IntoResponse,
    },
    Json,
};
use common::protocol::{ErrorResponse, LiveUpdate};
use futures::stream::{self, Stream};
use tracing::debug;
use uuid::Uuid;

use super::state::AppState;

/// SSE `event:` field of every live update.
pub const LIVE_UPDATE_EVENT_TYPE: &str = "event-type";

/// `POST /api/health` — liveness check. Always `204 No Content`.
pub async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// `GET /api/event/live-updates` — server-sent event stream.
///
/// Emits one [`LiveUpdate`] per configured interval until the client
/// disconnects, at which point the stream is dropped.
pub async fn live_updates(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    debug!("live-updates client connected");
    Sse::new(live_update_stream(
        state.live_updates_interval,
        state.live_updates_retry,
    ))
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

fn live_update_stream(
    interval: Duration,
    retry: Duration,
) -> impl Stream<Item = Result<Event, axum::Error>> {
    stream::unfold((), move |()| async move {
        tokio::time::sleep(interval).await;
        Some((live_update_event(retry), ()))
    })
}

fn live_update_event(retry: Duration) -> Result<Event, axum::Error> {
    Event::default()
        .event(LIVE_UPDATE_EVENT_TYPE)
        .id(Uuid::new_v4().to_string())
        .retry(retry)
        .json_data(LiveUpdate::new("Random name"))
}
