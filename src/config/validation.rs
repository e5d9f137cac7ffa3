//! Configuration validation.
//!
//! Returns every problem found, not just the first, so a broken config file
//! can be fixed in one pass.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),
    #[error("proxy.base_path '{0}' must start with '/' and must not end with '/'")]
    BasePath(String),
    #[error("proxy.default_scheme '{0}' must be 'http' or 'https'")]
    DefaultScheme(String),
    #[error("proxy.scheme_header '{0}' is not a valid header name")]
    SchemeHeader(String),
    #[error("timeouts.request_secs must be greater than zero")]
    RequestTimeout,
}

/// Check value ranges and formats that serde cannot express.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let base = &config.proxy.base_path;
    if !base.is_empty() && (!base.starts_with('/') || base.ends_with('/')) {
        errors.push(ValidationError::BasePath(base.clone()));
    }

    let scheme = config.proxy.default_scheme.as_str();
    if scheme != "http" && scheme != "https" {
        errors.push(ValidationError::DefaultScheme(scheme.to_string()));
    }

    if axum::http::HeaderName::from_bytes(config.proxy.scheme_header.as_bytes()).is_err() {
        errors.push(ValidationError::SchemeHeader(
            config.proxy.scheme_header.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
