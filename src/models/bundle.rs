//! Data bundle: one exported snapshot of the entity graph
//!
//! Each category maps a bundle-local key to a record. Keys are only unique
//! within one bundle and carry no meaning for the store. A missing category,
//! an explicit `null` and an empty object all mean "nothing to restore".

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::account::Account;
use super::category::Category;
use super::comment::Comment;
use super::course::{Course, Instructor, Student};
use super::evaluation::{Evaluation, Submission};
use super::feedback::{FeedbackResponse, FeedbackResponseComment, FeedbackSession};
use super::feedback_question::FeedbackQuestion;

/// Records of one category keyed by bundle-local key
pub type Records<T> = HashMap<String, T>;

/// A deserialized data bundle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataBundle {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub accounts: Records<Account>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub courses: Records<Course>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub instructors: Records<Instructor>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub students: Records<Student>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub evaluations: Records<Evaluation>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub feedback_sessions: Records<FeedbackSession>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub feedback_questions: Records<FeedbackQuestion>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub feedback_responses: Records<FeedbackResponse>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub feedback_response_comments: Records<FeedbackResponseComment>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub submissions: Records<Submission>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Records<Comment>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Records<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Records<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl DataBundle {
    /// Number of records in a category
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Account => self.accounts.len(),
            Category::Course => self.courses.len(),
            Category::Instructor => self.instructors.len(),
            Category::Student => self.students.len(),
            Category::Evaluation => self.evaluations.len(),
            Category::FeedbackSession => self.feedback_sessions.len(),
            Category::FeedbackQuestion => self.feedback_questions.len(),
            Category::FeedbackResponse => self.feedback_responses.len(),
            Category::FeedbackResponseComment => self.feedback_response_comments.len(),
            Category::Submission => self.submissions.len(),
            Category::Comment => self.comments.len(),
        }
    }

    /// Whether a category has nothing to restore
    pub fn is_empty(&self, category: Category) -> bool {
        self.len(category) == 0
    }

    /// Total number of records across all categories
    pub fn total_records(&self) -> usize {
        Category::RESTORE_ORDER.iter().map(|&c| self.len(c)).sum()
    }

    /// Per-category record counts, in restore order, skipping empty categories
    pub fn summary(&self) -> BundleSummary {
        BundleSummary {
            counts: Category::RESTORE_ORDER
                .iter()
                .filter(|&&c| !self.is_empty(c))
                .map(|&c| (c, self.len(c)))
                .collect(),
        }
    }
}

/// Record counts of a bundle's non-empty categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleSummary {
    pub counts: Vec<(Category, usize)>,
}

impl BundleSummary {
    /// Human-readable one-liner, e.g. "2 accounts, 1 courses"
    pub fn describe(&self) -> String {
        if self.counts.is_empty() {
            return "empty bundle".to_string();
        }
        self.counts
            .iter()
            .map(|(category, count)| format!("{} {}", count, category))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
