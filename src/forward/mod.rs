//! Forwarding surface.
//!
//! # Data Flow
//! ```text
//! inbound request (any method, wildcard path)
//!     → request_id.rs (correlation ID)
//!     → handler.rs (rebuild target URL, re-serialize body)
//!     → backend origin (reqwest, JSON only)
//!     → status + JSON body relayed verbatim
//!     → any failure collapses to a fixed 500 envelope
//! ```

pub mod handler;
pub mod request_id;
pub mod server;

pub use handler::FORWARD_ERROR_MESSAGE;
pub use request_id::{RequestIdLayer, X_REQUEST_ID};
pub use server::{ForwardServer, ForwardState};
