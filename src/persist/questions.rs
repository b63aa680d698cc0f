//! Feedback question preparation
//!
//! The store lists questions in insertion order, so they must be inserted in
//! display order: by course, then session, then question number.

use std::cmp::Ordering;

use crate::models::FeedbackQuestion;

/// Display order of feedback questions: (course, session, question number)
pub fn compare_questions(a: &FeedbackQuestion, b: &FeedbackQuestion) -> Ordering {
    a.course_id
        .cmp(&b.course_id)
        .then_with(|| a.feedback_session_name.cmp(&b.feedback_session_name))
        .then_with(|| a.question_number.cmp(&b.question_number))
}

/// Normalize visibility options and sort into display order
pub fn prepare_questions<I>(questions: I) -> Vec<FeedbackQuestion>
where
    I: IntoIterator<Item = FeedbackQuestion>,
{
    let mut prepared: Vec<FeedbackQuestion> = questions
        .into_iter()
        .map(|mut question| {
            question.remove_irrelevant_visibility_options();
            question
        })
        .collect();

    prepared.sort_by(compare_questions);
    prepared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feedback_question::tests::question;
    use crate::models::FeedbackParticipantType;

    fn positions(questions: &[FeedbackQuestion]) -> Vec<(String, String, u32)> {
        questions
            .iter()
            .map(|q| {
                (
                    q.course_id.clone(),
                    q.feedback_session_name.clone(),
                    q.question_number,
                )
            })
            .collect()
    }

    #[test]
    fn test_sorts_by_position_within_session() {
        let prepared = prepare_questions(vec![
            question("CS101", "S1", 3),
            question("CS101", "S1", 1),
            question("CS101", "S1", 2),
        ]);

        let numbers: Vec<_> = prepared.iter().map(|q| q.question_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_sorts_by_course_then_session() {
        let prepared = prepare_questions(vec![
            question("CS102", "A", 1),
            question("CS101", "B", 1),
            question("CS101", "A", 2),
            question("CS101", "A", 1),
        ]);

        assert_eq!(
            positions(&prepared),
            vec![
                ("CS101".into(), "A".into(), 1),
                ("CS101".into(), "A".into(), 2),
                ("CS101".into(), "B".into(), 1),
                ("CS102".into(), "A".into(), 1),
            ]
        );
    }

    #[test]
    fn test_position_compares_numerically() {
        let prepared = prepare_questions(vec![question("C", "S", 10), question("C", "S", 9)]);
        let numbers: Vec<_> = prepared.iter().map(|q| q.question_number).collect();
        assert_eq!(numbers, vec![9, 10]);
    }

    #[test]
    fn test_normalizes_every_question() {
        let mut q = question("CS101", "S1", 1);
        q.recipient_type = FeedbackParticipantType::None;
        q.show_response_to = vec![
            FeedbackParticipantType::Instructors,
            FeedbackParticipantType::Receiver,
        ];

        let prepared = prepare_questions(vec![q]);
        assert!(!prepared[0]
            .show_response_to
            .contains(&FeedbackParticipantType::Receiver));
    }

    #[test]
    fn test_equal_keys_keep_relative_order() {
        let mut first = question("C", "S", 1);
        first.question_text = "first".into();
        let mut second = question("C", "S", 1);
        second.question_text = "second".into();

        let prepared = prepare_questions(vec![first, second]);
        assert_eq!(prepared[0].question_text, "first");
        assert_eq!(prepared[1].question_text, "second");
    }
}
