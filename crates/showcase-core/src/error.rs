//! Error types for the showcase application.

use thiserror::Error;

/// A shared error type for the entire showcase workspace.
///
/// `GatewayUnavailable` is the only failure the chat flow recognizes at
/// runtime; the remaining variants cover configuration loading and the
/// ambient plumbing around it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any transport, auth, or provider failure while talking to the hosted model
    #[error("Advisor gateway unavailable: {message}")]
    GatewayUnavailable {
        status_code: Option<u16>,
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShowcaseError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a GatewayUnavailable error without an HTTP status
    pub fn gateway(message: impl Into<String>) -> Self {
        Self::GatewayUnavailable {
            status_code: None,
            message: message.into(),
        }
    }

    /// Creates a GatewayUnavailable error carrying the provider's HTTP status
    pub fn gateway_status(status_code: u16, message: impl Into<String>) -> Self {
        Self::GatewayUnavailable {
            status_code: Some(status_code),
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a gateway failure
    pub fn is_gateway_unavailable(&self) -> bool {
        matches!(self, Self::GatewayUnavailable { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ShowcaseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ShowcaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ShowcaseError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ShowcaseError>`.
pub type Result<T> = std::result::Result<T, ShowcaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let err: ShowcaseError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "secret.json").into();
        match err {
            ShowcaseError::Io { message } => {
                assert!(message.contains("secret.json"));
                assert!(message.contains("NotFound"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_gateway_status_display() {
        let err = ShowcaseError::gateway_status(503, "UNAVAILABLE: overloaded");
        assert!(err.is_gateway_unavailable());
        assert_eq!(
            err.to_string(),
            "Advisor gateway unavailable: UNAVAILABLE: overloaded"
        );
    }
}
