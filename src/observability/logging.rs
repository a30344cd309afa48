//! Structured logging initialization.
//!
//! Uses the tracing crate; `RUST_LOG` wins when set, otherwise the
//! configured level is applied to this crate and tower_http.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber. Call once at startup.
pub fn init(log_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "video_gateway={log_level},tower_http={log_level}"
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
