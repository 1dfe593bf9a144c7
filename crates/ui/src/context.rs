use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::Question;
use services::{QuizController, SessionToken};
use tokio::sync::{Mutex, mpsc, oneshot};

use crate::start_form::StartForm;
use crate::vm::{PoolStatus, ScreenVm, map_screen, map_start};

// Provided by the composition root (`crates/app`) through `LaunchBuilder::with_context`.

/// Shared handles into the quiz engine.
#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<Mutex<QuizController>>,
    initial_form: StartForm,
    ticks: Arc<Mutex<mpsc::UnboundedReceiver<SessionToken>>>,
    pool: Arc<std::sync::Mutex<Option<oneshot::Receiver<Vec<Question>>>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(
        quiz: QuizController,
        initial_form: StartForm,
        ticks: mpsc::UnboundedReceiver<SessionToken>,
        pool: oneshot::Receiver<Vec<Question>>,
    ) -> Self {
        Self {
            quiz: Arc::new(Mutex::new(quiz)),
            initial_form,
            ticks: Arc::new(Mutex::new(ticks)),
            pool: Arc::new(std::sync::Mutex::new(Some(pool))),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<Mutex<QuizController>> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn initial_form(&self) -> StartForm {
        self.initial_form
    }

    pub(crate) fn ticks(&self) -> Arc<Mutex<mpsc::UnboundedReceiver<SessionToken>>> {
        Arc::clone(&self.ticks)
    }

    /// The pool load can only be awaited once.
    pub(crate) fn take_pool(&self) -> Option<oneshot::Receiver<Vec<Question>>> {
        self.pool.lock().ok().and_then(|mut slot| slot.take())
    }
}

/// Reactive copy of what the quiz page renders.
#[derive(Clone, Copy, PartialEq)]
pub struct QuizState {
    pub screen: Signal<ScreenVm>,
    pub form: Signal<StartForm>,
    pub notice: Signal<Option<String>>,
}

impl QuizState {
    /// Re-map the screen from the controller.
    pub fn show(mut self, quiz: &QuizController) {
        let form = *self.form.peek();
        self.screen.set(map_screen(quiz, &form));
    }
}

pub fn use_quiz_state_provider(ctx: &AppContext) -> QuizState {
    let initial_form = ctx.initial_form();
    let quiz = ctx.quiz();
    let screen = use_signal(|| {
        quiz.try_lock().map_or_else(
            |_| ScreenVm::Start(map_start(&initial_form, PoolStatus::Loading)),
            |quiz| map_screen(&quiz, &initial_form),
        )
    });
    let form = use_signal(|| initial_form);
    let notice = use_signal(|| None::<String>);
    use_context_provider(|| QuizState {
        screen,
        form,
        notice,
    })
}
