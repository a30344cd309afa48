//! Configuration loading.
//!
//! Precedence: TOML file (when given), then environment overrides,
//! then semantic validation.

use std::fs;
use std::path::Path;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment override for the client facade base URL.
pub const API_URL_ENV: &str = "VIDEO_API_URL";

/// Environment override for the forwarding backend origin.
pub const FORWARD_URL_ENV: &str = "FORWARD_BACKEND_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolve the effective configuration for this process.
///
/// With no file path the compiled-in defaults are used; either way the
/// environment overrides are applied on top and the result validated.
pub fn resolve_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => GatewayConfig::default(),
    };

    apply_env_overrides(
        &mut config,
        std::env::var(API_URL_ENV).ok(),
        std::env::var(FORWARD_URL_ENV).ok(),
    );

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides to a loaded config.
///
/// Separated from the actual environment access so it can be tested
/// without mutating process state.
pub fn apply_env_overrides(
    config: &mut GatewayConfig,
    api_url: Option<String>,
    forward_url: Option<String>,
) {
    if let Some(url) = api_url {
        config.client.base_url = url;
    }
    if let Some(url) = forward_url {
        config.forwarder.backend_origin = url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{DEFAULT_API_ORIGIN, DEFAULT_FORWARD_ORIGIN};

    #[test]
    fn defaults_when_no_overrides() {
        let mut config = GatewayConfig::default();
        apply_env_overrides(&mut config, None, None);
        assert_eq!(config.client.base_url, DEFAULT_API_ORIGIN);
        assert_eq!(config.forwarder.backend_origin, DEFAULT_FORWARD_ORIGIN);
    }

    #[test]
    fn overrides_replace_both_origins_independently() {
        let mut config = GatewayConfig::default();
        apply_env_overrides(&mut config, Some("http://api.example.com".into()), None);
        assert_eq!(config.client.base_url, "http://api.example.com");
        assert_eq!(config.forwarder.backend_origin, DEFAULT_FORWARD_ORIGIN);

        apply_env_overrides(&mut config, None, Some("http://other.example.com".into()));
        assert_eq!(config.client.base_url, "http://api.example.com");
        assert_eq!(config.forwarder.backend_origin, "http://other.example.com");
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config.client.request_timeout_ms, 30_000);
        assert_eq!(config.client.upload_timeout_ms, 120_000);
        assert_eq!(config.forwarder.request_timeout_secs, 30);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [client]
            base_url = "http://10.0.0.5:8000"
            "#,
        )
        .unwrap();
        assert_eq!(config.client.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.client.request_timeout_ms, 30_000);
        assert_eq!(config.forwarder.backend_origin, DEFAULT_FORWARD_ORIGIN);
    }
}
