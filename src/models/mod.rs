//! Core data models for bundle-restore
//!
//! The entity-attribute records found in a data bundle, the bundle itself,
//! and the category table that drives restore order and failure isolation.

pub mod account;
pub mod bundle;
pub mod category;
pub mod comment;
pub mod course;
pub mod entity;
pub mod evaluation;
pub mod feedback;
pub mod feedback_question;

pub use account::Account;
pub use bundle::{BundleSummary, DataBundle, Records};
pub use category::{Category, Isolation};
pub use comment::{Comment, CommentRecipientType};
pub use course::{Course, Instructor, Student};
pub use entity::{Entity, ValidationError};
pub use evaluation::{Evaluation, Submission};
pub use feedback::{FeedbackResponse, FeedbackResponseComment, FeedbackSession};
pub use feedback_question::{FeedbackParticipantType, FeedbackQuestion};
