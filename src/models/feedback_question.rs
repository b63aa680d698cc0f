//! Feedback question model
//!
//! A question belongs to a feedback session and carries its display position
//! within that session. Visibility lists say who may see the response, the
//! giver's name and the recipient's name.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::entity::{require_non_empty, Entity, ValidationError};

/// Participant roles used for givers, recipients and visibility options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackParticipantType {
    #[serde(rename = "SELF")]
    Myself,
    Students,
    Instructors,
    Teams,
    OwnTeam,
    OwnTeamMembers,
    OwnTeamMembersIncludingSelf,
    Receiver,
    ReceiverTeamMembers,
    None,
}

impl fmt::Display for FeedbackParticipantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Myself => "self",
            Self::Students => "students",
            Self::Instructors => "instructors",
            Self::Teams => "teams",
            Self::OwnTeam => "own team",
            Self::OwnTeamMembers => "own team members",
            Self::OwnTeamMembersIncludingSelf => "own team members including self",
            Self::Receiver => "recipient",
            Self::ReceiverTeamMembers => "recipient's team members",
            Self::None => "nobody",
        };
        write!(f, "{}", label)
    }
}

/// A question within a feedback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackQuestion {
    pub feedback_session_name: String,
    pub course_id: String,

    #[serde(default)]
    pub creator_email: String,

    /// Question text or serialized question details
    pub question_text: String,

    #[serde(default = "default_question_type")]
    pub question_type: String,

    /// 1-based display position within the session
    pub question_number: u32,

    pub giver_type: FeedbackParticipantType,
    pub recipient_type: FeedbackParticipantType,

    /// Number of recipients each giver responds to; -100 means "all"
    #[serde(default = "default_entities_to_give_feedback_to")]
    pub number_of_entities_to_give_feedback_to: i32,

    #[serde(default)]
    pub show_response_to: Vec<FeedbackParticipantType>,

    #[serde(default)]
    pub show_giver_name_to: Vec<FeedbackParticipantType>,

    #[serde(default)]
    pub show_recipient_name_to: Vec<FeedbackParticipantType>,
}

fn default_question_type() -> String {
    "TEXT".to_string()
}

fn default_entities_to_give_feedback_to() -> i32 {
    -100
}

impl FeedbackQuestion {
    /// Drop visibility options that mean nothing for this question's
    /// giver and recipient configuration.
    ///
    /// - No recipient: nobody can be shown as the recipient or its team.
    /// - Team, instructor or own-team recipients have no "recipient's team
    ///   members".
    /// - Team or instructor givers have no "own team members".
    pub fn remove_irrelevant_visibility_options(&mut self) {
        let mut irrelevant = Vec::new();

        match self.recipient_type {
            FeedbackParticipantType::None => {
                irrelevant.push(FeedbackParticipantType::Receiver);
                irrelevant.push(FeedbackParticipantType::ReceiverTeamMembers);
            }
            FeedbackParticipantType::Teams
            | FeedbackParticipantType::Instructors
            | FeedbackParticipantType::OwnTeam
            | FeedbackParticipantType::OwnTeamMembers => {
                irrelevant.push(FeedbackParticipantType::ReceiverTeamMembers);
            }
            _ => {}
        }

        if matches!(
            self.giver_type,
            FeedbackParticipantType::Teams | FeedbackParticipantType::Instructors
        ) {
            irrelevant.push(FeedbackParticipantType::OwnTeamMembers);
        }

        for list in [
            &mut self.show_response_to,
            &mut self.show_giver_name_to,
            &mut self.show_recipient_name_to,
        ] {
            list.retain(|option| !irrelevant.contains(option));
        }
    }
}

impl Entity for FeedbackQuestion {
    const CATEGORY: Category = Category::FeedbackQuestion;

    fn identity(&self) -> String {
        format!(
            "{}/{}/Q{}",
            self.course_id, self.feedback_session_name, self.question_number
        )
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("courseId", &self.course_id)?;
        require_non_empty("feedbackSessionName", &self.feedback_session_name)?;
        require_non_empty("questionText", &self.question_text)?;
        if self.question_number == 0 {
            return Err(ValidationError::new("questionNumber", "must be at least 1"));
        }
        if matches!(
            self.giver_type,
            FeedbackParticipantType::None | FeedbackParticipantType::Receiver
        ) {
            return Err(ValidationError::new(
                "giverType",
                format!("{} cannot give feedback", self.giver_type),
            ));
        }
        Ok(())
    }
}
