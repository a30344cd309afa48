//! Client facade over the video API backend.
//!
//! # Data Flow
//! ```text
//! caller
//!     → facade.rs (one method per remote capability)
//!     → reqwest (shared instance, fixed headers/timeouts)
//!     → error.rs (ordered transport classification + remaps)
//!     → parsed JSON body or ApiError
//! ```
//!
//! # Design Decisions
//! - Configuration injected once at construction; no globals
//! - Classification reads structured error fields, never message text
//! - No retries: a failed call is terminal

pub mod error;
pub mod facade;
pub mod progress;
pub mod types;

pub use error::{ApiError, ErrorKind};
pub use facade::ApiClient;
pub use progress::{ProgressFn, UploadProgress};
pub use types::{RenderOptions, UploadResponse, UploadSource};
