//! Peer evaluation models
//!
//! An evaluation belongs to a course; submissions record one reviewer's
//! assessment of one reviewee within an evaluation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::entity::{require_email, require_non_empty, Entity, ValidationError};

/// A peer evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub course_id: String,
    pub name: String,

    #[serde(default)]
    pub instructions: String,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    /// Offset from UTC in hours
    #[serde(default)]
    pub time_zone: f64,

    /// Grace period in minutes
    #[serde(default)]
    pub grace_period: i32,

    #[serde(default)]
    pub p2p_enabled: bool,

    #[serde(default)]
    pub published: bool,

    #[serde(default)]
    pub activated: bool,
}

impl Entity for Evaluation {
    const CATEGORY: Category = Category::Evaluation;

    fn identity(&self) -> String {
        format!("{}/{}", self.course_id, self.name)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("courseId", &self.course_id)?;
        require_non_empty("name", &self.name)?;
        if self.end_time < self.start_time {
            return Err(ValidationError::new(
                "endTime",
                "must not be earlier than startTime",
            ));
        }
        if self.grace_period < 0 {
            return Err(ValidationError::new("gracePeriod", "cannot be negative"));
        }
        if !(-12.0..=14.0).contains(&self.time_zone) {
            return Err(ValidationError::new(
                "timeZone",
                format!("is out of range: {}", self.time_zone),
            ));
        }
        Ok(())
    }
}

/// One reviewer's submission for one reviewee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub course: String,
    pub evaluation: String,

    #[serde(default)]
    pub team: String,

    pub reviewer: String,
    pub reviewee: String,

    /// Points awarded; negative values are sentinels for "not submitted"
    #[serde(default)]
    pub points: i32,

    #[serde(default)]
    pub justification: String,

    #[serde(default)]
    pub p2p_feedback: String,
}

impl Entity for Submission {
    const CATEGORY: Category = Category::Submission;

    fn identity(&self) -> String {
        format!(
            "{}/{}/{}->{}",
            self.course, self.evaluation, self.reviewer, self.reviewee
        )
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("course", &self.course)?;
        require_non_empty("evaluation", &self.evaluation)?;
        require_email("reviewer", &self.reviewer)?;
        require_email("reviewee", &self.reviewee)?;
        Ok(())
    }
}
