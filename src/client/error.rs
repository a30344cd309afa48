//! Error envelope and transport-failure classification.
//!
//! # Responsibilities
//! - Normalize every failed call into a `{kind, message}` envelope
//! - Apply the four ordered transport classifications (first match wins)
//! - Preserve original status and body for operation-specific remaps
//!
//! # Design Decisions
//! - Classification reads structured fields (status, timeout flag),
//!   never message text
//! - Failures matching none of the four rules pass through with kind
//!   `Unknown` and their status/body intact

use serde_json::Value;

/// Message for failures that never reached the server.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Cannot connect to server. Please check that the server is running.";

/// Message for preflight (status 0) failures.
pub const CORS_ERROR_MESSAGE: &str = "Request blocked by CORS policy. Please try again later.";

/// Message for timeouts, client- or server-side.
pub const TIMEOUT_ERROR_MESSAGE: &str = "Request timed out. Please try again.";

/// Message for 5xx responses.
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

/// Classification of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Cors,
    Timeout,
    Server,
    PayloadTooLarge,
    Transport,
    Unknown,
}

/// Normalized error surfaced to callers of the client facade.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,

    /// HTTP status of the failed response, if one was received.
    pub status: Option<u16>,

    /// Parsed response body, if one was received and decoded.
    pub body: Option<Value>,
}

impl ApiError {
    /// Build an envelope with no response attached.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            body: None,
        }
    }

    /// A request that could not be built or whose response could not be
    /// decoded.
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, detail)
    }

    /// The backend's structured `error` field, if the body carried one.
    pub fn backend_error(&self) -> Option<&str> {
        self.body.as_ref()?.get("error")?.as_str()
    }
}

/// Structured view of a failed transport exchange.
///
/// Built from a [`reqwest::Error`] or an error-status response before
/// classification, which keeps [`classify`] a pure function.
#[derive(Debug, Default)]
pub struct TransportFailure {
    /// Response status, when a response arrived at all.
    pub status: Option<u16>,

    /// Client-side timeout fired before a response arrived.
    pub timed_out: bool,

    /// Connection could not be established.
    pub connect_failed: bool,

    /// Decoded response body, when one was received.
    pub body: Option<Value>,

    /// Underlying error text, kept for unclassified failures.
    pub detail: String,
}

impl TransportFailure {
    /// Capture the structured facts of a transport-level error.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        Self {
            status: err.status().map(|s| s.as_u16()),
            timed_out: err.is_timeout(),
            connect_failed: err.is_connect(),
            body: None,
            detail: err.to_string(),
        }
    }
}

/// Apply the ordered classification rules to a failed exchange.
///
/// Rules, first match wins:
/// 1. no response and no timeout → network
/// 2. status 0 (preflight failure) → CORS
/// 3. status 408 or client-side timeout → timeout
/// 4. status ≥ 500 → server error
///
/// Anything else passes through as `Unknown` with its status and body
/// preserved so operation handlers can inspect them.
pub fn classify(failure: TransportFailure) -> ApiError {
    let TransportFailure {
        status,
        timed_out,
        connect_failed,
        body,
        detail,
    } = failure;

    let (kind, message) = if connect_failed || (status.is_none() && !timed_out) {
        (ErrorKind::Network, NETWORK_ERROR_MESSAGE.to_string())
    } else if status == Some(0) {
        (ErrorKind::Cors, CORS_ERROR_MESSAGE.to_string())
    } else if status == Some(408) || timed_out {
        (ErrorKind::Timeout, TIMEOUT_ERROR_MESSAGE.to_string())
    } else if status.is_some_and(|s| s >= 500) {
        (ErrorKind::Server, SERVER_ERROR_MESSAGE.to_string())
    } else {
        let message = body
            .as_ref()
            .and_then(|b| b.get("error"))
            .and_then(|e| e.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| match status {
                Some(code) => format!("Request failed with status {}", code),
                None => detail,
            });
        (ErrorKind::Unknown, message)
    };

    ApiError {
        kind,
        message,
        status,
        body,
    }
}
