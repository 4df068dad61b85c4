//! Error types for the Motiva workspace.

use thiserror::Error;

/// A shared error type for the entire Motiva workspace.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone)]
pub enum MotivaError {
    /// Lexicon source could not be read or parsed
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Completion collaborator failed (transport or HTTP level)
    #[error("Completion error: {message}")]
    Completion {
        status_code: Option<u16>,
        message: String,
    },

    /// Completion collaborator produced no usable text
    #[error("Completion returned empty content")]
    EmptyCompletion,

    /// Snapshot index outside the saved range
    #[error("Snapshot index {index} out of range ({len} saved)")]
    SnapshotOutOfRange { index: usize, len: usize },

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

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MotivaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Lexicon error
    pub fn lexicon(message: impl Into<String>) -> Self {
        Self::Lexicon(message.into())
    }

    /// Creates a Completion error without an HTTP status
    pub fn completion(message: impl Into<String>) -> Self {
        Self::Completion {
            status_code: None,
            message: message.into(),
        }
    }

    /// Creates a Completion error carrying an HTTP status
    pub fn completion_http(status_code: u16, message: impl Into<String>) -> Self {
        Self::Completion {
            status_code: Some(status_code),
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
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

    /// Check if this is a Completion error (transport/HTTP failure)
    pub fn is_completion(&self) -> bool {
        matches!(self, Self::Completion { .. })
    }

    /// Check if this is an EmptyCompletion error
    pub fn is_empty_completion(&self) -> bool {
        matches!(self, Self::EmptyCompletion)
    }

    /// Check if this is a Lexicon error
    pub fn is_lexicon(&self) -> bool {
        matches!(self, Self::Lexicon(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for MotivaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for MotivaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for MotivaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for MotivaError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from String (for error messages)
impl From<String> for MotivaError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, MotivaError>`.
pub type Result<T> = std::result::Result<T, MotivaError>;
