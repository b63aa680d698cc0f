//! Custom error types for bundle-restore
//!
//! Two families live here. `RestoreError` covers setup and loading failures
//! (configuration, file access, malformed bundles). `StoreError` is what the
//! backing store reports when it rejects a create call; persisters turn those
//! into report entries instead of propagating them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for restore setup and bundle loading
#[derive(Error, Debug)]
pub enum RestoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors (store directory, report files)
    #[error("Storage error: {0}")]
    Storage(String),

    /// A bundle file could not be read or parsed
    #[error("Failed to load bundle {path}: {message}")]
    Load { path: String, message: String },
}

impl RestoreError {
    /// Create a load error for the given bundle path
    pub fn load(path: impl std::fmt::Display, message: impl Into<String>) -> Self {
        Self::Load {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for RestoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RestoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for restore operations
pub type RestoreResult<T> = Result<T, RestoreError>;

/// Rejection reported by the backing store for a create call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// One or more fields failed validation
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// An entity with the same identity is already stored
    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: &'static str,
        identifier: String,
    },

    /// An entity the create call depends on is missing
    #[error("{entity_type} does not exist: {identifier}")]
    DoesNotExist {
        entity_type: &'static str,
        identifier: String,
    },

    /// The store failed to persist an accepted write
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl StoreError {
    /// Create an "already exists" error
    pub fn already_exists(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type,
            identifier: identifier.into(),
        }
    }

    /// Create a "does not exist" error
    pub fn does_not_exist(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::DoesNotExist {
            entity_type,
            identifier: identifier.into(),
        }
    }

    /// The report-level kind of this rejection
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidParameters(_) => FailureKind::InvalidParameters,
            Self::AlreadyExists { .. } => FailureKind::AlreadyExists,
            Self::DoesNotExist { .. } => FailureKind::DoesNotExist,
            Self::Storage(_) => FailureKind::Storage,
        }
    }
}

/// Result type alias for backing store calls
pub type StoreResult<T> = Result<T, StoreError>;

/// Kind of a persistence failure, as recorded in the run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidParameters,
    AlreadyExists,
    DoesNotExist,
    Storage,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::InvalidParameters => write!(f, "invalid parameters"),
            FailureKind::AlreadyExists => write!(f, "already exists"),
            FailureKind::DoesNotExist => write!(f, "does not exist"),
            FailureKind::Storage => write!(f, "storage failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RestoreError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_load_error() {
        let err = RestoreError::load("Backup/a/one.json", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Failed to load bundle Backup/a/one.json: expected value at line 1"
        );
        assert!(matches!(err, RestoreError::Load { .. }));
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::already_exists("Account", "alice.g");
        assert_eq!(err.to_string(), "Account already exists: alice.g");

        let err = StoreError::does_not_exist("Course", "CS101");
        assert_eq!(err.to_string(), "Course does not exist: CS101");
    }

    #[test]
    fn test_store_error_kind() {
        assert_eq!(
            StoreError::InvalidParameters("x".into()).kind(),
            FailureKind::InvalidParameters
        );
        assert_eq!(
            StoreError::already_exists("Course", "c").kind(),
            FailureKind::AlreadyExists
        );
        assert_eq!(
            StoreError::does_not_exist("Course", "c").kind(),
            FailureKind::DoesNotExist
        );
        assert_eq!(StoreError::Storage("disk".into()).kind(), FailureKind::Storage);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RestoreError = io_err.into();
        assert!(matches!(err, RestoreError::Io(_)));
    }
}
