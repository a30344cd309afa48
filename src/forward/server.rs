//! Forwarding server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the wildcard forwarding route
//! - Wire up middleware (timeout, tracing, request ID)
//! - Serve the listener until shutdown

use std::time::Duration;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ForwarderConfig;
use crate::forward::handler::{forward_path, forward_root};
use crate::forward::request_id::RequestIdLayer;

/// State injected into the forwarding handler.
///
/// The client carries no default headers on purpose: inbound headers
/// are dropped and the handler sets its own Content-Type.
#[derive(Clone)]
pub struct ForwardState {
    pub client: reqwest::Client,
    pub backend_origin: String,
}

/// HTTP server exposing the forwarding surface.
pub struct ForwardServer {
    router: Router,
}

impl ForwardServer {
    /// Build the server from the given configuration.
    pub fn new(config: &ForwarderConfig) -> Self {
        let state = ForwardState {
            client: reqwest::Client::new(),
            backend_origin: config.backend_origin.trim_end_matches('/').to_string(),
        };

        let router = Router::new()
            .route("/{*path}", any(forward_path))
            .route("/", any(forward_root))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Forwarding server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("Forwarding server stopped");
        Ok(())
    }
}
