//! Response types served over the public HTTP API.
//!
//! Field names are serialised in `camelCase` to stay wire-compatible with the
//! other routing nodes.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Live updates
// ---------------------------------------------------------------------------

/// Payload carried in the `data` field of each live-update server-sent event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveUpdate {
    /// Display name of the update source.
    pub name: String,
}

impl LiveUpdate {
    /// Construct a [`LiveUpdate`] for the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"not_found"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
