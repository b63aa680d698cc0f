//! Entity categories and the restore policy table
//!
//! A data bundle carries exactly eleven categories. This module fixes the
//! order they are restored in and, for each one, the unit of work whose
//! failure is isolated from its siblings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entity type within a data bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Account,
    Course,
    Instructor,
    Student,
    Evaluation,
    FeedbackSession,
    FeedbackQuestion,
    FeedbackResponse,
    FeedbackResponseComment,
    Submission,
    Comment,
}

/// Granularity at which a persistence failure is contained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Isolation {
    /// One create call per record; a rejected record leaves its siblings alone
    Record,
    /// One bulk create call per category; a rejection fails the whole category
    Category,
}

impl Category {
    /// Restore order. Parents come before the categories that reference them.
    pub const RESTORE_ORDER: [Category; 11] = [
        Category::Account,
        Category::Course,
        Category::Instructor,
        Category::Student,
        Category::Evaluation,
        Category::FeedbackSession,
        Category::FeedbackQuestion,
        Category::FeedbackResponse,
        Category::FeedbackResponseComment,
        Category::Submission,
        Category::Comment,
    ];

    /// Failure isolation policy for this category.
    ///
    /// | Category                | Isolation |
    /// |-------------------------|-----------|
    /// | Account                 | Record    |
    /// | Evaluation              | Record    |
    /// | everything else         | Category  |
    pub fn isolation(self) -> Isolation {
        match self {
            Category::Account | Category::Evaluation => Isolation::Record,
            Category::Course
            | Category::Instructor
            | Category::Student
            | Category::FeedbackSession
            | Category::FeedbackQuestion
            | Category::FeedbackResponse
            | Category::FeedbackResponseComment
            | Category::Submission
            | Category::Comment => Isolation::Category,
        }
    }

    /// Singular entity name used in store errors
    pub fn entity_name(self) -> &'static str {
        match self {
            Category::Account => "Account",
            Category::Course => "Course",
            Category::Instructor => "Instructor",
            Category::Student => "Student",
            Category::Evaluation => "Evaluation",
            Category::FeedbackSession => "Feedback session",
            Category::FeedbackQuestion => "Feedback question",
            Category::FeedbackResponse => "Feedback response",
            Category::FeedbackResponseComment => "Feedback response comment",
            Category::Submission => "Submission",
            Category::Comment => "Comment",
        }
    }

    /// File stem used by the JSON store
    pub fn file_stem(self) -> &'static str {
        match self {
            Category::Account => "accounts",
            Category::Course => "courses",
            Category::Instructor => "instructors",
            Category::Student => "students",
            Category::Evaluation => "evaluations",
            Category::FeedbackSession => "feedback_sessions",
            Category::FeedbackQuestion => "feedback_questions",
            Category::FeedbackResponse => "feedback_responses",
            Category::FeedbackResponseComment => "feedback_response_comments",
            Category::Submission => "submissions",
            Category::Comment => "comments",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Account => "accounts",
            Category::Course => "courses",
            Category::Instructor => "instructors",
            Category::Student => "students",
            Category::Evaluation => "evaluations",
            Category::FeedbackSession => "feedback sessions",
            Category::FeedbackQuestion => "feedback questions",
            Category::FeedbackResponse => "feedback responses",
            Category::FeedbackResponseComment => "feedback response comments",
            Category::Submission => "submissions",
            Category::Comment => "comments",
        };
        write!(f, "{}", label)
    }
}
