//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → passed by reference to each surface at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable for the process lifetime; no reload
//! - All fields have defaults so a missing file still boots
//! - The two backend origins are deliberately independent

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ClientConfig;
pub use schema::ForwarderConfig;
pub use schema::GatewayConfig;
pub use schema::ObservabilityConfig;
