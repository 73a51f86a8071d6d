//! Common error types used across the workspace.
//!
//! Two families live here:
//! - [`ValidationError`]: local checks that fail before any network call.
//! - [`ApiError`]: the uniform failure channel of every backend call.

use serde::Deserialize;

/// A local validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The host address is not a dotted-quad IPv4 address.
    #[error("invalid IP address: {0:?}")]
    InvalidIp(String),
}

/// Failure of a backend call.
///
/// `Display` is exactly the carried message so it can be shown to the
/// user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network failure, non-2xx status, or an undecodable body.
    #[error("{0}")]
    Transport(String),
    /// The backend rejected the request with an explanatory message.
    #[error("{0}")]
    Validation(String),
}

/// JSON error body returned by the backend on rejected requests.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Transport error for a non-2xx status code.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self::Transport(format!("HTTP {status}"))
    }

    /// Classify a non-2xx response to a mutating call.
    ///
    /// A body shaped like `{"error": "..."}` becomes a [`ApiError::Validation`]
    /// carrying that message; anything else falls back to the status code.
    #[must_use]
    pub fn rejection(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(body) if !body.error.is_empty() => Self::Validation(body.error),
            _ => Self::status(status),
        }
    }
}

/// Extract the message of an `{"error": "..."}` body, if any.
pub(crate) fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|body| body.error)
        .filter(|message| !message.is_empty())
}
