use quiz_core::model::ModeKind;
use services::{AnswerOutcome, QuizController};

use crate::intent::QuizIntent;
use crate::start_form::StartForm;

pub const NOT_AVAILABLE: &str = "Not available here.";
pub const ANSWER_LOCKED: &str = "That answer is final.";

/// Apply one intent to the controller and the start form.
///
/// Returns a notice for the user when the intent was refused or had no
/// effect, `None` otherwise.
pub async fn apply_intent(
    quiz: &mut QuizController,
    form: &mut StartForm,
    intent: QuizIntent,
) -> Option<String> {
    if !intent.allowed_in(quiz.phase()) {
        return Some(NOT_AVAILABLE.to_string());
    }

    let result = match intent {
        QuizIntent::Start => match form.validate() {
            Ok(config) => quiz.start(config).await.map(drop),
            Err(err) => return Some(err.to_string()),
        },
        QuizIntent::SetCount(count) => {
            form.count = count;
            Ok(())
        }
        QuizIntent::SetMinutes(minutes) => {
            form.minutes = minutes;
            Ok(())
        }
        QuizIntent::SetMode(mode) => {
            form.mode = mode;
            Ok(())
        }
        QuizIntent::SetRange(start, end) => {
            form.range = (start, end);
            form.mode = ModeKind::Interval;
            Ok(())
        }
        QuizIntent::SetLocked(locked) => {
            form.locked = locked;
            Ok(())
        }
        QuizIntent::Answer(label) => match quiz.answer_current(label) {
            Ok(AnswerOutcome::Locked) => return Some(ANSWER_LOCKED.to_string()),
            other => other.map(drop),
        },
        QuizIntent::Next => quiz.next().map(drop),
        QuizIntent::Previous => quiz.previous().map(drop),
        QuizIntent::GoTo(position) => quiz.jump(position).map(drop),
        QuizIntent::Finish => quiz.finish().map(drop),
        QuizIntent::Review => quiz.review(),
        QuizIntent::BackToResults => quiz.close_review(),
        QuizIntent::ToggleMark(id) => quiz.toggle_mark(id).await.map(drop),
        QuizIntent::Restart => {
            quiz.restart();
            Ok(())
        }
    };

    match result {
        Ok(()) => None,
        Err(err) => {
            tracing::debug!(error = %err, ?intent, "intent rejected");
            Some(err.to_string())
        }
    }
}
