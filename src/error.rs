//! Unified error types for tgalarm
//!
//! This module defines all error types used throughout the crate.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error raised while bringing up the callback
    #[error("Callback error: {0}")]
    Callback(#[from] CallbackError),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Failed to parse config file
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Required field is unset
    #[error("Assign {0}")]
    MissingField(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Errors from deriving the alert text out of the host's alert context
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// The host supplied no result description
    #[error("alert result description is missing")]
    MissingDescription,

    /// The host failed while producing alert context
    #[error("failed to read alert context: {0}")]
    Context(String),
}

/// Errors from a single exchange with the recipient daemon
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// Host name did not resolve to any address
    #[error("Unable to resolve {host}:{port}: {source}")]
    Unresolved {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// Could not connect to any resolved address
    #[error("Connection to {address} failed: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the request failed
    #[error("Failed to write request: {0}")]
    Write(#[source] std::io::Error),

    /// Reading the reply failed for a reason other than the read timeout
    #[error("Failed to read reply: {0}")]
    Read(#[source] std::io::Error),

    /// Settings needed for delivery are unavailable
    #[error("Delivery not configured: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from the plugin lifecycle
#[derive(Error, Debug)]
pub enum CallbackError {
    /// Configuration was rejected
    #[error("{0}")]
    Config(#[from] ConfigError),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_missing_field_display() {
        let err = ConfigError::MissingField("nicks".to_string());
        assert_eq!(err.to_string(), "Assign nicks");
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            key: "port".to_string(),
            message: "must be between 1 and 65535".to_string(),
        };
        assert!(err.to_string().contains("'port'"));
        assert!(err.to_string().contains("65535"));
    }

    #[test]
    fn test_connect_error_keeps_source() {
        let err = DeliveryError::Connect {
            address: "127.0.0.1:1".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        };
        assert!(err.to_string().contains("127.0.0.1:1"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_conversion() {
        let config_err = ConfigError::MissingField("host".to_string());
        let app_err: AppError = config_err.into();
        assert!(matches!(app_err, AppError::Config(_)));
    }

    #[test]
    fn test_delivery_error_from_config() {
        let err: DeliveryError = ConfigError::MissingField("port".to_string()).into();
        assert_eq!(err.to_string(), "Delivery not configured: Assign port");
    }
}
