//! Error types for the YAGA application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire YAGA application.
///
/// An unknown or exhausted session is deliberately absent here: the session
/// layer reports it as a normal completion signal, not as a failure.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum YagaError {
    /// Generation was requested for a level missing from the difficulty table
    #[error("unknown difficulty {level}; add a matching entry to the difficulty table")]
    UnknownDifficulty { level: i64 },

    /// The exercise registry has no entry under this name
    #[error("Unknown exercise '{name}' (available: {})", .available.join(", "))]
    UnknownExercise {
        name: String,
        available: Vec<String>,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl YagaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an UnknownDifficulty error
    pub fn unknown_difficulty(level: impl Into<i64>) -> Self {
        Self::UnknownDifficulty {
            level: level.into(),
        }
    }

    /// Creates an UnknownExercise error listing what is registered
    pub fn unknown_exercise<I, S>(name: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownExercise {
            name: name.into(),
            available: available.into_iter().map(Into::into).collect(),
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

    /// Check if this is an UnknownDifficulty error
    pub fn is_unknown_difficulty(&self) -> bool {
        matches!(self, Self::UnknownDifficulty { .. })
    }

    /// Check if this is an UnknownExercise error
    pub fn is_unknown_exercise(&self) -> bool {
        matches!(self, Self::UnknownExercise { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for YagaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for YagaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for YagaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, YagaError>`.
pub type Result<T> = std::result::Result<T, YagaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_exercise_message_lists_available() {
        let err = YagaError::unknown_exercise("scales", ["chord_practice", "arpeggios"]);
        assert!(err.is_unknown_exercise());
        assert_eq!(
            err.to_string(),
            "Unknown exercise 'scales' (available: chord_practice, arpeggios)"
        );
    }

    #[test]
    fn test_unknown_difficulty_message() {
        let err = YagaError::unknown_difficulty(999);
        assert!(err.is_unknown_difficulty());
        assert!(err.to_string().starts_with("unknown difficulty 999"));

        let negative = YagaError::unknown_difficulty(-1);
        assert_eq!(negative, YagaError::UnknownDifficulty { level: -1 });
        assert!(negative.to_string().starts_with("unknown difficulty -1"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
        let err: YagaError = io.into();
        match err {
            YagaError::Io { message } => assert!(message.contains("NotFound")),
            other => panic!("expected Io, got {:?}", other),
        }
    }
}
