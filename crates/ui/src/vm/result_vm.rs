use services::{CompletionReason, Session};

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MistakeVm {
    pub title: String,
    pub chosen: String,
    pub correct: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub headline: String,
    pub score_label: String,
    pub percentage_label: String,
    pub completed_at_str: Option<String>,
    pub mistakes: Vec<MistakeVm>,
    pub is_empty: bool,
}

pub const NO_ANSWER: &str = "no answer";

#[must_use]
pub fn map_result(session: &Session) -> ResultVm {
    let score = session.score();

    let headline = match session.completion_reason() {
        Some(CompletionReason::TimeUp) => "Time is up!",
        Some(CompletionReason::Empty) => "No questions matched these settings.",
        _ => "Quiz completed!",
    }
    .to_string();

    let mistakes = score
        .mistakes()
        .iter()
        .map(|mistake| MistakeVm {
            title: format!(
                "{}. {}",
                mistake.question.id(),
                mistake.question.prompt()
            ),
            chosen: match (mistake.chosen, mistake.chosen_text()) {
                (Some(label), Some(text)) => format!("{label}) {text}"),
                _ => NO_ANSWER.to_string(),
            },
            correct: format!("{}) {}", mistake.question.correct(), mistake.correct_text()),
        })
        .collect();

    ResultVm {
        headline,
        score_label: format!(
            "You answered {} of {} questions correctly.",
            score.correct(),
            score.total()
        ),
        percentage_label: format!("Score: {}%", score.percentage()),
        completed_at_str: session.completed_at().map(format_datetime),
        mistakes,
        is_empty: session.is_empty(),
    }
}
