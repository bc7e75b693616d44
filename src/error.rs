//! Gate error taxonomy and the status→message table.
//!
//! ERROR HANDLING
//! ==============
//! Exactly one place (the request gate) classifies HTTP outcomes into this
//! taxonomy; callers never re-implement the mapping. Errors are always both
//! logged and returned, so call sites can run their own local recovery
//! without duplicating messaging.

/// Failure surfaced by the gate or its auth provider.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// Login rejected by the authentication service (bad credentials).
    /// Session cleanup is guaranteed before this is returned.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// A 401 on any gated call. The session has already been torn down.
    #[error("session expired, please sign in again")]
    SessionExpired,

    /// Any other non-2xx response, carrying the fixed category message
    /// (or the server-provided one when present).
    #[error("{message}")]
    Api { status: u16, message: String },

    /// No response received (connection refused, DNS failure, timeout).
    #[error("network connection failed, please check your connection")]
    Connectivity,

    /// A 2xx response whose body could not be decoded.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// The request could not be built or sent for a non-network reason.
    #[error("request could not be sent: {0}")]
    Transport(#[source] reqwest::Error),
}

impl GateError {
    /// Classify a non-2xx status, preferring a server-supplied message.
    #[must_use]
    pub(crate) fn from_status(status: u16, server_message: Option<String>) -> Self {
        if status == 401 {
            return Self::SessionExpired;
        }
        Self::Api {
            status,
            message: server_message.unwrap_or_else(|| status_message(status)),
        }
    }

    /// HTTP status behind this error, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::SessionExpired => Some(401),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Fixed human-readable category for an HTTP status code.
#[must_use]
pub fn status_message(status: u16) -> String {
    match status {
        400 => "invalid request parameters".to_owned(),
        401 => "session expired, please sign in again".to_owned(),
        403 => "you do not have permission to perform this action".to_owned(),
        404 => "requested resource not found".to_owned(),
        408 => "request timed out, please try again".to_owned(),
        500 => "internal server error, please try again later".to_owned(),
        502 => "bad gateway".to_owned(),
        503 => "service unavailable".to_owned(),
        504 => "gateway timeout".to_owned(),
        other => format!("request failed ({other})"),
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
