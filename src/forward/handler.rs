//! The forwarding handler.
//!
//! # Responsibilities
//! - Rebuild the target URL from the wildcard path segments
//! - Copy the inbound method; re-serialize non-GET/HEAD bodies as JSON
//! - Drop inbound headers (only `Content-Type: application/json` goes out)
//! - Relay the backend's status and JSON body verbatim
//! - Collapse every failure into a fixed 500 envelope

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};

use crate::forward::request_id::X_REQUEST_ID;
use crate::forward::server::ForwardState;

/// Fixed `error` field of the 500 envelope.
pub const FORWARD_ERROR_MESSAGE: &str = "Backend connection failed";

/// Handler for the wildcard route.
pub async fn forward_path(
    State(state): State<ForwardState>,
    Path(path): Path<String>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    forward(state, method, path, headers, body).await
}

/// Handler for the bare root. The target keeps a trailing empty
/// segment; the backend decides what that means.
pub async fn forward_root(
    State(state): State<ForwardState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    forward(state, method, String::new(), headers, body).await
}

async fn forward(
    state: ForwardState,
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let target = format!("{}/{}", state.backend_origin, path);

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        target = %target,
        "Forwarding request"
    );

    match dispatch(&state, &method, &target, body).await {
        Ok((status, value)) => {
            tracing::debug!(
                request_id = %request_id,
                status = status.as_u16(),
                "Relaying backend response"
            );
            (status, Json(value)).into_response()
        }
        Err(detail) => {
            tracing::error!(request_id = %request_id, error = %detail, "Forward failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": FORWARD_ERROR_MESSAGE,
                    "details": detail,
                })),
            )
                .into_response()
        }
    }
}

/// Issue the outbound call. Any error, from URL construction through
/// JSON decode, surfaces as the `details` string of the 500 envelope.
async fn dispatch(
    state: &ForwardState,
    method: &Method,
    target: &str,
    body: Bytes,
) -> Result<(StatusCode, Value), String> {
    let outbound_method = reqwest::Method::from_bytes(method.as_str().as_bytes())
        .map_err(|e| e.to_string())?;

    let mut request = state.client.request(outbound_method, target);
    if method != Method::GET && method != Method::HEAD {
        let payload: Value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).map_err(|e| e.to_string())?
        };
        request = request.json(&payload);
    }

    let response = request.send().await.map_err(|e| e.to_string())?;
    let status = StatusCode::from_u16(response.status().as_u16()).map_err(|e| e.to_string())?;
    let value = response.json::<Value>().await.map_err(|e| e.to_string())?;
    Ok((status, value))
}
