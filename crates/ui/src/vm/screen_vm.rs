use services::{QuizController, QuizPhase};

use crate::start_form::StartForm;
use crate::vm::{
    PoolStatus, QuestionVm, ResultVm, ReviewVm, StartVm, map_question, map_result, map_review,
    map_start,
};

/// Everything the quiz page shows, picked by the controller phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Start(StartVm),
    Question(QuestionVm),
    Result(ResultVm),
    Review(ReviewVm),
}

#[must_use]
pub fn pool_status(quiz: &QuizController) -> PoolStatus {
    if quiz.is_pool_loaded() {
        PoolStatus::Ready {
            questions: quiz.pool().len(),
            marked: quiz.marked_in_pool(),
        }
    } else {
        PoolStatus::Loading
    }
}

#[must_use]
pub fn map_screen(quiz: &QuizController, form: &StartForm) -> ScreenVm {
    let start = || ScreenVm::Start(map_start(form, pool_status(quiz)));
    match (quiz.phase(), quiz.session()) {
        (QuizPhase::InProgress, Some(session)) => {
            map_question(session).map_or_else(start, ScreenVm::Question)
        }
        (QuizPhase::Completed, Some(session)) => ScreenVm::Result(map_result(session)),
        (QuizPhase::Reviewing, Some(_)) => {
            ScreenVm::Review(map_review(&quiz.review_items().unwrap_or_default()))
        }
        _ => start(),
    }
}
