//! File-backed backing store
//!
//! One JSON file per category under the store directory. Enforces record
//! validity and identity uniqueness, and that an evaluation's course exists.

use std::path::PathBuf;

use crate::error::{RestoreError, StoreError, StoreResult};
use crate::models::{
    Account, Category, Comment, Course, Entity, Evaluation, FeedbackQuestion, FeedbackResponse,
    FeedbackResponseComment, FeedbackSession, Instructor, Student, Submission,
};

use super::client::StoreClient;
use super::table::Table;

/// JSON store holding one table per category
pub struct JsonStore {
    pub accounts: Table<Account>,
    pub courses: Table<Course>,
    pub instructors: Table<Instructor>,
    pub students: Table<Student>,
    pub evaluations: Table<Evaluation>,
    pub feedback_sessions: Table<FeedbackSession>,
    pub feedback_questions: Table<FeedbackQuestion>,
    pub feedback_responses: Table<FeedbackResponse>,
    pub feedback_response_comments: Table<FeedbackResponseComment>,
    pub submissions: Table<Submission>,
    pub comments: Table<Comment>,
}

impl JsonStore {
    /// Open (or create) a store in `dir` and load every table
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, RestoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            RestoreError::Storage(format!(
                "Failed to create store directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let store = Self::with_dir(Some(dir));
        store.load_all()?;
        Ok(store)
    }

    /// A store that is never written to disk
    pub fn in_memory() -> Self {
        Self::with_dir(None)
    }

    fn with_dir(dir: Option<PathBuf>) -> Self {
        let file = |category: Category| {
            dir.as_ref()
                .map(|d| d.join(format!("{}.json", category.file_stem())))
        };

        Self {
            accounts: Table::new(file(Category::Account)),
            courses: Table::new(file(Category::Course)),
            instructors: Table::new(file(Category::Instructor)),
            students: Table::new(file(Category::Student)),
            evaluations: Table::new(file(Category::Evaluation)),
            feedback_sessions: Table::new(file(Category::FeedbackSession)),
            feedback_questions: Table::new(file(Category::FeedbackQuestion)),
            feedback_responses: Table::new(file(Category::FeedbackResponse)),
            feedback_response_comments: Table::new(file(Category::FeedbackResponseComment)),
            submissions: Table::new(file(Category::Submission)),
            comments: Table::new(file(Category::Comment)),
        }
    }

    /// Load all tables from disk
    pub fn load_all(&self) -> Result<(), RestoreError> {
        self.accounts.load()?;
        self.courses.load()?;
        self.instructors.load()?;
        self.students.load()?;
        self.evaluations.load()?;
        self.feedback_sessions.load()?;
        self.feedback_questions.load()?;
        self.feedback_responses.load()?;
        self.feedback_response_comments.load()?;
        self.submissions.load()?;
        self.comments.load()?;
        Ok(())
    }

    /// Number of stored records in a category
    pub fn count(&self, category: Category) -> StoreResult<usize> {
        match category {
            Category::Account => self.accounts.count(),
            Category::Course => self.courses.count(),
            Category::Instructor => self.instructors.count(),
            Category::Student => self.students.count(),
            Category::Evaluation => self.evaluations.count(),
            Category::FeedbackSession => self.feedback_sessions.count(),
            Category::FeedbackQuestion => self.feedback_questions.count(),
            Category::FeedbackResponse => self.feedback_responses.count(),
            Category::FeedbackResponseComment => self.feedback_response_comments.count(),
            Category::Submission => self.submissions.count(),
            Category::Comment => self.comments.count(),
        }
    }
}

impl StoreClient for JsonStore {
    fn create_account(&self, account: &Account) -> StoreResult<()> {
        self.accounts.insert(account)
    }

    fn create_courses(&self, courses: &[Course]) -> StoreResult<()> {
        self.courses.insert_all(courses)
    }

    fn create_instructors(&self, instructors: &[Instructor]) -> StoreResult<()> {
        self.instructors.insert_all(instructors)
    }

    fn create_students(&self, students: &[Student]) -> StoreResult<()> {
        self.students.insert_all(students)
    }

    fn create_evaluation(&self, evaluation: &Evaluation) -> StoreResult<()> {
        self.evaluations.insert_with(evaluation, |evaluation| {
            if self.courses.contains(&evaluation.course_id)? {
                Ok(())
            } else {
                Err(StoreError::does_not_exist(
                    Course::CATEGORY.entity_name(),
                    evaluation.course_id.clone(),
                ))
            }
        })
    }

    fn create_feedback_sessions(&self, sessions: &[FeedbackSession]) -> StoreResult<()> {
        self.feedback_sessions.insert_all(sessions)
    }

    fn create_feedback_questions(&self, questions: &[FeedbackQuestion]) -> StoreResult<()> {
        self.feedback_questions.insert_all(questions)
    }

    fn create_feedback_responses(&self, responses: &[FeedbackResponse]) -> StoreResult<()> {
        self.feedback_responses.insert_all(responses)
    }

    fn create_feedback_response_comments(
        &self,
        comments: &[FeedbackResponseComment],
    ) -> StoreResult<()> {
        self.feedback_response_comments.insert_all(comments)
    }

    fn create_submissions(&self, submissions: &[Submission]) -> StoreResult<()> {
        self.submissions.insert_all(submissions)
    }

    fn create_comments(&self, comments: &[Comment]) -> StoreResult<()> {
        self.comments.insert_all(comments)
    }

    fn flush(&self) -> StoreResult<()> {
        self.accounts.flush()?;
        self.evaluations.flush()
    }
}
