//! Common behaviour of entity-attribute records
//!
//! Every record knows its category, can render its identity (the key the
//! store enforces uniqueness on), and can check its own fields.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

use super::category::Category;

/// An entity-attribute record stored by the backing store
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Category this record belongs to
    const CATEGORY: Category;

    /// Identity the store enforces uniqueness on
    fn identity(&self) -> String;

    /// Check field-level constraints
    fn validate(&self) -> Result<(), ValidationError>;
}

/// A field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}

/// Fail if `value` is blank
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "cannot be empty"));
    }
    Ok(())
}

/// Fail if `value` is not a plausible email address
pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require_non_empty(field, value)?;

    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !value.contains(' ')
        }
        None => false,
    };

    if !valid {
        return Err(ValidationError::new(
            field,
            format!("is not a valid email address: {}", value),
        ));
    }
    Ok(())
}

/// Fail if `value` is longer than `max` characters
pub fn require_max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::new(
            field,
            format!("is too long ({} characters, max {})", len, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("name", "Alice").is_ok());
        let err = require_non_empty("name", "   ").unwrap_err();
        assert_eq!(err.to_string(), "name cannot be empty");
    }

    #[test]
    fn test_require_email() {
        assert!(require_email("email", "alice@example.com").is_ok());
        assert!(require_email("email", "alice").is_err());
        assert!(require_email("email", "@example.com").is_err());
        assert!(require_email("email", "a@b@c").is_err());
        assert!(require_email("email", "al ice@example.com").is_err());
    }

    #[test]
    fn test_require_max_len() {
        assert!(require_max_len("name", "abc", 3).is_ok());
        assert!(require_max_len("name", "abcd", 3).is_err());
    }
}
