//! Error types shared by the HTTP layer and the session store.
//!
//! ERROR HANDLING
//! ==============
//! Every variant carries owned strings so errors are `Clone` and can be
//! handed to every caller awaiting a shared session operation.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure talking to the WMS REST API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// HTTP is only wired up in the browser build.
    #[error("HTTP client not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, pulling a human-readable message out of the body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: extract_error_message(body) }
    }

    /// `true` for 401 responses (no valid session cookie).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// Message suitable for showing to the user: the server-provided message
    /// when there is one, otherwise the error's display string.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Extract `message` (string or list of strings) or `error` from a JSON error body.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let obj = value.as_object()?;

    match obj.get("message") {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => return Some(s.clone()),
        Some(serde_json::Value::Array(items)) => {
            let parts: Vec<&str> = items.iter().filter_map(serde_json::Value::as_str).collect();
            if !parts.is_empty() {
                return Some(parts.join("; "));
            }
        }
        _ => {}
    }

    obj.get("error")
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_owned)
}

/// Failure establishing a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Login or the follow-up identity fetch failed.
    #[error("login failed: {message}")]
    LoginFailed { message: String, source: ApiError },
}

impl SessionError {
    /// Message recorded on the session and shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::LoginFailed { message, .. } => message,
        }
    }
}

/// Failure following a chain of route redirects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("too many redirects while navigating to {path}")]
    TooManyRedirects { path: String },
}
