//! Category persisters
//!
//! Each persister takes one category's records from one bundle, prepares
//! them, and hands them to the store. Failures are turned into report
//! entries and logged; nothing is propagated to the caller.
//!
//! Accounts and evaluations are created one record at a time, so a rejected
//! record does not affect its siblings. Every other category goes through a
//! single bulk call and fails as a whole (see `Category::isolation`).

pub mod questions;

use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::models::{
    Account, Comment, Course, Entity, Evaluation, FeedbackQuestion, FeedbackResponse,
    FeedbackResponseComment, FeedbackSession, Instructor, Records, Student, Submission,
};
use crate::report::{CategoryOutcome, PersistFailure};
use crate::storage::StoreClient;

pub use questions::{compare_questions, prepare_questions};

/// Persists bundle categories through a store client
pub struct Persister<'s, S: ?Sized> {
    store: &'s S,
}

impl<'s, S: StoreClient + ?Sized> Persister<'s, S> {
    /// Create a persister writing to `store`
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Create accounts one at a time; a rejected account is skipped
    pub fn persist_accounts(&self, accounts: Records<Account>) -> CategoryOutcome {
        per_record(
            accounts,
            |account| self.store.create_account(account),
            || self.store.flush(),
        )
    }

    /// Create all courses in one call
    pub fn persist_courses(&self, courses: Records<Course>) -> CategoryOutcome {
        bulk(courses.into_values().collect(), |courses| {
            self.store.create_courses(courses)
        })
    }

    /// Create all instructors in one call
    pub fn persist_instructors(&self, instructors: Records<Instructor>) -> CategoryOutcome {
        bulk(instructors.into_values().collect(), |instructors| {
            self.store.create_instructors(instructors)
        })
    }

    /// Create all students in one call
    pub fn persist_students(&self, students: Records<Student>) -> CategoryOutcome {
        bulk(students.into_values().collect(), |students| {
            self.store.create_students(students)
        })
    }

    /// Create evaluations one at a time; a rejected evaluation is skipped
    pub fn persist_evaluations(&self, evaluations: Records<Evaluation>) -> CategoryOutcome {
        per_record(
            evaluations,
            |evaluation| self.store.create_evaluation(evaluation),
            || self.store.flush(),
        )
    }

    /// Create all feedback sessions in one call
    pub fn persist_feedback_sessions(&self, sessions: Records<FeedbackSession>) -> CategoryOutcome {
        bulk(sessions.into_values().collect(), |sessions| {
            self.store.create_feedback_sessions(sessions)
        })
    }

    /// Normalizes visibility options and inserts in display order
    pub fn persist_feedback_questions(
        &self,
        questions: Records<FeedbackQuestion>,
    ) -> CategoryOutcome {
        bulk(prepare_questions(questions.into_values()), |questions| {
            self.store.create_feedback_questions(questions)
        })
    }

    /// Create all feedback responses in one call
    pub fn persist_feedback_responses(
        &self,
        responses: Records<FeedbackResponse>,
    ) -> CategoryOutcome {
        bulk(responses.into_values().collect(), |responses| {
            self.store.create_feedback_responses(responses)
        })
    }

    /// Create all feedback response comments in one call
    pub fn persist_feedback_response_comments(
        &self,
        comments: Records<FeedbackResponseComment>,
    ) -> CategoryOutcome {
        bulk(comments.into_values().collect(), |comments| {
            self.store.create_feedback_response_comments(comments)
        })
    }

    /// Create all submissions in one call
    pub fn persist_submissions(&self, submissions: Records<Submission>) -> CategoryOutcome {
        // Plain copy into a new sequence; order is not significant
        let mut list = Vec::with_capacity(submissions.len());
        for submission in submissions.into_values() {
            list.push(submission);
        }

        bulk(list, |submissions| self.store.create_submissions(submissions))
    }

    /// Create all comments in one call
    pub fn persist_comments(&self, comments: Records<Comment>) -> CategoryOutcome {
        bulk(comments.into_values().collect(), |comments| {
            self.store.create_comments(comments)
        })
    }
}

/// One create call per record; failures are recorded and the loop continues
///
/// Accepted records are made durable by one `flush` at the end. If that
/// fails, none of them count as created.
fn per_record<T, F, G>(records: Records<T>, mut create: F, flush: G) -> CategoryOutcome
where
    T: Entity,
    F: FnMut(&T) -> StoreResult<()>,
    G: FnOnce() -> StoreResult<()>,
{
    let category = T::CATEGORY;
    let mut outcome = CategoryOutcome::new(category, records.len());

    // Key order only makes reports reproducible
    let mut entries: Vec<(String, T)> = records.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (key, record) in entries {
        match create(&record) {
            Ok(()) => outcome.created += 1,
            Err(err) => {
                let context = format!("{} ({})", key, record.identity());
                warn!(
                    category = %category,
                    key = %key,
                    kind = %err.kind(),
                    "Error in uploading {}: {}",
                    category,
                    err
                );
                outcome
                    .failures
                    .push(PersistFailure::new(category, context, &err));
            }
        }
    }

    if outcome.created > 0 {
        if let Err(err) = flush() {
            warn!(
                category = %category,
                records = outcome.created,
                kind = %err.kind(),
                "Error in uploading {}: {}",
                category,
                err
            );
            outcome.created = 0;
            outcome
                .failures
                .push(PersistFailure::new(category, category.to_string(), &err));
        }
    }

    debug!(
        category = %category,
        created = outcome.created,
        failed = outcome.failures.len(),
        "Persisted category record by record"
    );
    outcome
}

/// A single bulk create call for the whole category
fn bulk<T, F>(records: Vec<T>, create: F) -> CategoryOutcome
where
    T: Entity,
    F: FnOnce(&[T]) -> StoreResult<()>,
{
    let category = T::CATEGORY;
    let mut outcome = CategoryOutcome::new(category, records.len());

    match create(&records) {
        Ok(()) => {
            outcome.created = records.len();
            debug!(category = %category, created = outcome.created, "Persisted category");
        }
        Err(err) => {
            warn!(
                category = %category,
                records = records.len(),
                kind = %err.kind(),
                "Error in uploading {}: {}",
                category,
                err
            );
            outcome
                .failures
                .push(PersistFailure::new(category, category.to_string(), &err));
        }
    }

    outcome
}
