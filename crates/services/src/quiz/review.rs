use quiz_core::model::{OptionLabel, QuestionId, ReviewMarks};

use super::session::Session;

/// One option as shown on the review screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOption {
    pub label: OptionLabel,
    pub text: String,
    pub is_correct: bool,
    /// Chosen by the user and not the correct option.
    pub is_wrong_choice: bool,
}

/// Read-only projection of one answered (or skipped) question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub position: usize,
    pub question_id: QuestionId,
    pub prompt: String,
    pub options: Vec<ReviewOption>,
    pub chosen: Option<OptionLabel>,
    pub is_correct: bool,
    pub marked: bool,
}

pub(crate) fn review_items(session: &Session, marks: &ReviewMarks) -> Vec<ReviewItem> {
    session
        .questions()
        .iter()
        .enumerate()
        .map(|(position, question)| {
            let chosen = session.answer_at(position);
            let options = question
                .options()
                .map(|(label, text)| ReviewOption {
                    label,
                    text: text.to_owned(),
                    is_correct: question.is_correct(label),
                    is_wrong_choice: chosen == Some(label) && !question.is_correct(label),
                })
                .collect();

            ReviewItem {
                position,
                question_id: question.id(),
                prompt: question.prompt().to_owned(),
                options,
                chosen,
                is_correct: chosen.is_some_and(|label| question.is_correct(label)),
                marked: marks.contains(question.id()),
            }
        })
        .collect()
}
