//! Video Gateway
//!
//! Client-side access layer for a remote video processing backend plus
//! a minimal reverse-proxy surface, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                VIDEO GATEWAY                  │
//!                  │                                               │
//!   caller ───────▶│  client facade ──▶ reqwest ──▶ video API     │
//!                  │  (upload / transcribe / story / render /      │
//!                  │   search / probes, normalized errors)         │
//!                  │                                               │
//!   inbound ──────▶│  forward surface ──▶ reqwest ──▶ second      │
//!   request        │  (wildcard route, JSON relay, fixed 500       │
//!                  │   envelope on failure)                        │
//!                  │                                               │
//!                  │  cross-cutting: config, observability,        │
//!                  │  lifecycle                                    │
//!                  └──────────────────────────────────────────────┘
//! ```
//!
//! The two surfaces are independent at runtime and target separately
//! configured backend origins.

// Core surfaces
pub mod client;
pub mod config;
pub mod forward;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use client::{ApiClient, ApiError};
pub use config::GatewayConfig;
pub use forward::ForwardServer;
pub use lifecycle::Shutdown;
