//! Axum middleware layers applied to the router.
//!
//! Includes request tracing, timeout enforcement, and response compression.
//! The timeout covers producing the response head only, so long-lived event
//! streams are not cut off; compression skips `text/event-stream` responses.

use std::time::Duration;

/// Default per-request timeout applied to all routes.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
