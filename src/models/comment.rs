//! Instructor comment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::entity::{require_email, require_non_empty, Entity, ValidationError};

/// Who a comment is about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentRecipientType {
    #[default]
    Person,
    Team,
    Section,
    Course,
}

/// A comment an instructor left on students, teams or a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub course_id: String,
    pub giver_email: String,

    #[serde(default)]
    pub recipient_type: CommentRecipientType,

    #[serde(default)]
    pub recipients: Vec<String>,

    pub comment_text: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Comment {
    const CATEGORY: Category = Category::Comment;

    fn identity(&self) -> String {
        format!(
            "{}/{}/{}",
            self.course_id,
            self.giver_email,
            self.created_at.timestamp_millis()
        )
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("courseId", &self.course_id)?;
        require_email("giverEmail", &self.giver_email)?;
        require_non_empty("commentText", &self.comment_text)?;
        if self.recipient_type != CommentRecipientType::Course && self.recipients.is_empty() {
            return Err(ValidationError::new("recipients", "cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_requires_recipients() {
        let json = r#"{
            "courseId": "CS101",
            "giverEmail": "prof@example.com",
            "recipientType": "PERSON",
            "commentText": "Good work",
            "createdAt": "2014-03-01T10:00:00Z"
        }"#;
        let mut comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.validate().unwrap_err().field, "recipients");

        comment.recipients.push("s1@example.com".into());
        assert!(comment.validate().is_ok());

        comment.recipients.clear();
        comment.recipient_type = CommentRecipientType::Course;
        assert!(comment.validate().is_ok());
    }

    #[test]
    fn test_recipient_type_defaults_to_person() {
        let json = r#"{
            "courseId": "CS101",
            "giverEmail": "prof@example.com",
            "recipients": ["s1@example.com"],
            "commentText": "Good work",
            "createdAt": "2014-03-01T10:00:00Z"
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.recipient_type, CommentRecipientType::Person);
    }
}
