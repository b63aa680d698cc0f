//! Account model
//!
//! A user account, identified by its global login identifier.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::entity::{require_email, require_max_len, require_non_empty, Entity, ValidationError};

/// A user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Global login identifier
    pub google_id: String,

    /// Display name
    pub name: String,

    /// Whether the account holder is an instructor
    #[serde(default)]
    pub is_instructor: bool,

    /// Contact email
    pub email: String,

    /// Institute the account belongs to
    #[serde(default)]
    pub institute: String,
}

impl Account {
    /// Create a new account
    pub fn new(
        google_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            google_id: google_id.into(),
            name: name.into(),
            is_instructor: false,
            email: email.into(),
            institute: String::new(),
        }
    }
}

impl Entity for Account {
    const CATEGORY: Category = Category::Account;

    fn identity(&self) -> String {
        self.google_id.clone()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("googleId", &self.google_id)?;
        require_max_len("googleId", &self.google_id, 254)?;
        require_non_empty("name", &self.name)?;
        require_max_len("name", &self.name, 100)?;
        require_email("email", &self.email)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let account = Account::new("alice.g", "Alice", "alice@example.com");
        assert_eq!(account.identity(), "alice.g");
    }

    #[test]
    fn test_validation() {
        let account = Account::new("alice.g", "Alice", "alice@example.com");
        assert!(account.validate().is_ok());

        let account = Account::new("", "Alice", "alice@example.com");
        assert_eq!(account.validate().unwrap_err().field, "googleId");

        let account = Account::new("alice.g", "Alice", "not-an-email");
        assert_eq!(account.validate().unwrap_err().field, "email");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "googleId": "bob.g",
            "name": "Bob",
            "isInstructor": true,
            "email": "bob@example.com",
            "institute": "NUS"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert!(account.is_instructor);
        assert_eq!(account.institute, "NUS");
    }
}
