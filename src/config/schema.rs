//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so a missing or partial file still boots.

use serde::{Deserialize, Serialize};

/// Hardcoded fallback origin for the client facade.
pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:8000";

/// Hardcoded fallback origin for the forwarding handler's backend.
///
/// Deliberately independent of [`DEFAULT_API_ORIGIN`]; the two surfaces
/// target separate deployments.
pub const DEFAULT_FORWARD_ORIGIN: &str = "http://127.0.0.1:9000";

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Client facade settings (outbound API calls).
    pub client: ClientConfig,

    /// Forwarding handler settings (inbound proxy surface).
    pub forwarder: ForwarderConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Client facade configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the video API backend.
    pub base_url: String,

    /// Timeout for ordinary calls in milliseconds.
    pub request_timeout_ms: u64,

    /// Timeout for upload calls in milliseconds.
    pub upload_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_ORIGIN.to_string(),
            request_timeout_ms: 30_000,
            upload_timeout_ms: 120_000,
        }
    }
}

/// Forwarding handler configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ForwarderConfig {
    /// Bind address for the proxy listener (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Origin of the backend this surface forwards to.
    pub backend_origin: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            backend_origin: DEFAULT_FORWARD_ORIGIN.to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
