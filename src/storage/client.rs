//! Backing store client contract
//!
//! The narrow create-only surface the restore path talks to. Account and
//! evaluation creation take one record at a time and are made durable by a
//! single `flush`; every other category is created with a single bulk call.

use crate::error::StoreResult;
use crate::models::{
    Account, Comment, Course, Evaluation, FeedbackQuestion, FeedbackResponse,
    FeedbackResponseComment, FeedbackSession, Instructor, Student, Submission,
};

/// Create operations of the backing store, one per category
pub trait StoreClient {
    fn create_account(&self, account: &Account) -> StoreResult<()>;

    fn create_courses(&self, courses: &[Course]) -> StoreResult<()>;

    fn create_instructors(&self, instructors: &[Instructor]) -> StoreResult<()>;

    fn create_students(&self, students: &[Student]) -> StoreResult<()>;

    /// Fails with `DoesNotExist` if the evaluation's course is not stored
    fn create_evaluation(&self, evaluation: &Evaluation) -> StoreResult<()>;

    fn create_feedback_sessions(&self, sessions: &[FeedbackSession]) -> StoreResult<()>;

    /// Questions are listed back in the order they were inserted
    fn create_feedback_questions(&self, questions: &[FeedbackQuestion]) -> StoreResult<()>;

    fn create_feedback_responses(&self, responses: &[FeedbackResponse]) -> StoreResult<()>;

    fn create_feedback_response_comments(
        &self,
        comments: &[FeedbackResponseComment],
    ) -> StoreResult<()>;

    fn create_submissions(&self, submissions: &[Submission]) -> StoreResult<()>;

    fn create_comments(&self, comments: &[Comment]) -> StoreResult<()>;

    /// Make earlier single-record creates durable
    ///
    /// Called once after each record-by-record category. A store that
    /// persists every create immediately has nothing to do here.
    fn flush(&self) -> StoreResult<()> {
        Ok(())
    }
}
