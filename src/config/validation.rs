//! Configuration validation.
//!
//! Semantic checks only; serde handles the syntactic ones. Pure
//! function over the loaded config, returning every error rather than
//! just the first.

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic validation failure.
#[derive(Debug)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidOrigin { field: &'static str, value: String },
    ZeroTimeout(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address '{}'", addr)
            }
            ValidationError::InvalidOrigin { field, value } => {
                write!(f, "{} is not a valid http(s) origin: '{}'", field, value)
            }
            ValidationError::ZeroTimeout(field) => {
                write!(f, "{} must be greater than zero", field)
            }
        }
    }
}

/// Validate a loaded configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.forwarder.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.forwarder.bind_address.clone(),
        ));
    }

    check_origin(&mut errors, "client.base_url", &config.client.base_url);
    check_origin(
        &mut errors,
        "forwarder.backend_origin",
        &config.forwarder.backend_origin,
    );

    if config.client.request_timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("client.request_timeout_ms"));
    }
    if config.client.upload_timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("client.upload_timeout_ms"));
    }
    if config.forwarder.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("forwarder.request_timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_origin(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::InvalidOrigin {
            field,
            value: value.to_string(),
        }),
    }
}
