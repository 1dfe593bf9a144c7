use quiz_core::model::OptionLabel;
use services::Session;

use crate::vm::time_fmt::format_remaining;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: OptionLabel,
    pub text: String,
    pub selected: bool,
}

/// One entry of the question strip used to jump around the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepVm {
    pub position: usize,
    pub answered: bool,
    pub current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub header: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub chosen_label: Option<String>,
    pub timer_label: Option<String>,
    pub answered_label: String,
    pub steps: Vec<StepVm>,
    pub can_go_back: bool,
    pub is_last: bool,
}

/// Map the current question of an in-progress session. `None` for an empty session.
#[must_use]
pub fn map_question(session: &Session) -> Option<QuestionVm> {
    let question = session.current_question()?;
    let position = session.position();
    let chosen = session.answer_at(position);

    let options = question
        .options()
        .map(|(label, text)| OptionVm {
            label,
            text: text.to_string(),
            selected: chosen == Some(label),
        })
        .collect();

    let steps = session
        .answers()
        .iter()
        .enumerate()
        .map(|(index, answer)| StepVm {
            position: index,
            answered: answer.is_some(),
            current: index == position,
        })
        .collect();

    Some(QuestionVm {
        header: format!("Question {} of {}", position + 1, session.len()),
        prompt: format!("{}. {}", question.id(), question.prompt()),
        options,
        chosen_label: chosen.map(|label| format!("Your answer: {label}")),
        timer_label: session
            .remaining_secs()
            .map(|secs| format!("Time left: {}", format_remaining(secs))),
        answered_label: format!("{}/{} answered", session.answered_count(), session.len()),
        steps,
        can_go_back: position > 0,
        is_last: position + 1 == session.len(),
    })
}
