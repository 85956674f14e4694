//! Error types for the Stylr responder.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Stylr workspace.
///
/// Every variant is recoverable: the UI layer surfaces them as inline
/// messages and the user simply tries again.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StylrError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// User input was rejected (empty text, unsupported upload, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Camera / file picker failed (permission denied, cancelled, ...)
    #[error("Media capture failed: {0}")]
    MediaCapture(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StylrError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a MediaCapture error
    pub fn media_capture(message: impl Into<String>) -> Self {
        Self::MediaCapture(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an InvalidInput error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Errors the user can recover from by trying again.
    ///
    /// Input validation and capture failures are shown inline; everything
    /// else points at a broken installation.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::MediaCapture(_))
    }

    /// Text shown to the user when the error is surfaced inline.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(message) | Self::MediaCapture(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for StylrError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for StylrError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for StylrError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for StylrError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (infrastructure boundary)
impl From<anyhow::Error> for StylrError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, StylrError>`.
pub type Result<T> = std::result::Result<T, StylrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StylrError::not_found("conversation", "abc");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: conversation 'abc'");
    }

    #[test]
    fn test_user_message_strips_prefix_for_inline_errors() {
        let err = StylrError::invalid_input("Image size must be less than 10MB");
        assert!(err.is_user_recoverable());
        assert_eq!(err.user_message(), "Image size must be less than 10MB");

        let err = StylrError::internal("boom");
        assert!(!err.is_user_recoverable());
        assert_eq!(err.user_message(), "Internal error: boom");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StylrError = json_err.into();
        assert!(matches!(err, StylrError::Serialization { ref format, .. } if format == "JSON"));
    }
}
