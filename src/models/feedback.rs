//! Feedback session, response and response comment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::entity::{require_email, require_non_empty, Entity, ValidationError};

/// A feedback session within a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSession {
    pub feedback_session_name: String,
    pub course_id: String,
    pub creator_email: String,

    #[serde(default)]
    pub instructions: String,

    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    #[serde(default)]
    pub session_visible_from_time: Option<DateTime<Utc>>,

    #[serde(default)]
    pub results_visible_from_time: Option<DateTime<Utc>>,

    /// Offset from UTC in hours
    #[serde(default)]
    pub time_zone: f64,

    /// Grace period in minutes
    #[serde(default)]
    pub grace_period: i32,

    #[serde(default)]
    pub feedback_session_type: Option<String>,

    #[serde(default)]
    pub sent_open_email: bool,

    #[serde(default)]
    pub sent_published_email: bool,
}

impl Entity for FeedbackSession {
    const CATEGORY: Category = Category::FeedbackSession;

    fn identity(&self) -> String {
        format!("{}/{}", self.course_id, self.feedback_session_name)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("feedbackSessionName", &self.feedback_session_name)?;
        require_non_empty("courseId", &self.course_id)?;
        require_email("creatorEmail", &self.creator_email)?;
        if self.end_time < self.start_time {
            return Err(ValidationError::new(
                "endTime",
                "must not be earlier than startTime",
            ));
        }
        if self.grace_period < 0 {
            return Err(ValidationError::new("gracePeriod", "cannot be negative"));
        }
        Ok(())
    }
}

/// One giver's response to one question for one recipient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub feedback_session_name: String,
    pub course_id: String,
    pub feedback_question_id: String,

    #[serde(default)]
    pub feedback_question_type: String,

    /// Giver email or team name
    pub giver_email: String,

    #[serde(default)]
    pub giver_section: Option<String>,

    /// Recipient email, team name, or "%GENERAL%"
    pub recipient_email: String,

    #[serde(default)]
    pub recipient_section: Option<String>,

    /// Serialized answer
    #[serde(default)]
    pub response_meta_data: String,
}

impl FeedbackResponse {
    /// Store identifier for this response, referenced by response comments
    pub fn response_id(&self) -> String {
        format!(
            "{}%{}%{}",
            self.feedback_question_id, self.giver_email, self.recipient_email
        )
    }
}

impl Entity for FeedbackResponse {
    const CATEGORY: Category = Category::FeedbackResponse;

    fn identity(&self) -> String {
        self.response_id()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("feedbackSessionName", &self.feedback_session_name)?;
        require_non_empty("courseId", &self.course_id)?;
        require_non_empty("feedbackQuestionId", &self.feedback_question_id)?;
        require_non_empty("giverEmail", &self.giver_email)?;
        require_non_empty("recipientEmail", &self.recipient_email)?;
        Ok(())
    }
}

/// A comment attached to a feedback response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponseComment {
    pub course_id: String,
    pub feedback_session_name: String,
    pub feedback_question_id: String,
    pub feedback_response_id: String,
    pub giver_email: String,
    pub created_at: DateTime<Utc>,
    pub comment_text: String,

    #[serde(default)]
    pub giver_section: Option<String>,

    #[serde(default)]
    pub receiver_section: Option<String>,
}

impl Entity for FeedbackResponseComment {
    const CATEGORY: Category = Category::FeedbackResponseComment;

    fn identity(&self) -> String {
        format!(
            "{}/{}/{}",
            self.feedback_response_id,
            self.giver_email,
            self.created_at.timestamp_millis()
        )
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("courseId", &self.course_id)?;
        require_non_empty("feedbackResponseId", &self.feedback_response_id)?;
        require_email("giverEmail", &self.giver_email)?;
        require_non_empty("commentText", &self.comment_text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_json() {
        let json = r#"{
            "feedbackSessionName": "First Session",
            "courseId": "CS101",
            "creatorEmail": "prof@example.com",
            "startTime": "2014-03-01T00:00:00Z",
            "endTime": "2014-03-08T00:00:00Z",
            "timeZone": 8.0
        }"#;
        let session: FeedbackSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.identity(), "CS101/First Session");
        assert!(session.validate().is_ok());
    }

    #[test]
    fn test_session_end_before_start() {
        let json = r#"{
            "feedbackSessionName": "First Session",
            "courseId": "CS101",
            "creatorEmail": "prof@example.com",
            "startTime": "2014-03-08T00:00:00Z",
            "endTime": "2014-03-01T00:00:00Z"
        }"#;
        let session: FeedbackSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.validate().unwrap_err().field, "endTime");
    }

    #[test]
    fn test_response_id() {
        let json = r#"{
            "feedbackSessionName": "First Session",
            "courseId": "CS101",
            "feedbackQuestionId": "q1",
            "giverEmail": "a@example.com",
            "recipientEmail": "b@example.com"
        }"#;
        let response: FeedbackResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.response_id(), "q1%a@example.com%b@example.com");
        assert!(response.validate().is_ok());
    }
}
