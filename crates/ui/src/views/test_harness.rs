use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::Clock;
use quiz_core::model::{
    AnswerPolicy, OptionLabel, Question, QuestionDraft, QuestionId, QuizConfigDraft,
    SelectionMode,
};
use quiz_core::time::fixed_now;
use services::{
    ManualCountdown, QuizController, REVIEW_MARKS_KEY, ReviewMarkService, SessionToken,
};
use storage::repository::{InMemoryStore, KeyValueStore};
use tokio::sync::{mpsc, oneshot};

use crate::context::{AppContext, use_quiz_state_provider};
use crate::start_form::StartForm;
use crate::views::{QuizView, use_quiz_driver};

pub struct ViewHarness {
    pub quiz: QuizController,
    pub countdown: ManualCountdown,
}

pub fn question(id: u64) -> Question {
    QuestionDraft {
        id: QuestionId::new(id),
        prompt: format!("Prompt {id}"),
        options: vec![
            (OptionLabel::A, format!("alpha {id}")),
            (OptionLabel::B, format!("beta {id}")),
            (OptionLabel::C, format!("gamma {id}")),
        ],
        correct: "A".into(),
    }
    .validate()
    .unwrap()
}

fn controller(store: InMemoryStore, countdown: &ManualCountdown) -> QuizController {
    let marks = ReviewMarkService::new(Arc::new(store));
    QuizController::new(marks, Arc::new(countdown.clone()))
        .with_clock(Clock::fixed(fixed_now()))
        .with_seed(5)
}

/// Controller with ids `1..=pool_size` already loaded.
pub fn setup_view_harness(pool_size: u64) -> ViewHarness {
    let countdown = ManualCountdown::new();
    let mut quiz = controller(InMemoryStore::new(), &countdown);
    quiz.set_pool((1..=pool_size).map(question).collect());
    ViewHarness { quiz, countdown }
}

/// Controller whose pool is still loading.
pub fn setup_loading_harness() -> ViewHarness {
    let countdown = ManualCountdown::new();
    let quiz = controller(InMemoryStore::new(), &countdown);
    ViewHarness { quiz, countdown }
}

/// Like [`setup_view_harness`], with `marks` already persisted.
pub async fn setup_view_harness_with_marks(pool_size: u64, marks: &str) -> ViewHarness {
    let store = InMemoryStore::new();
    store.set(REVIEW_MARKS_KEY, marks).await.unwrap();
    let countdown = ManualCountdown::new();
    let mut quiz = controller(store, &countdown);
    quiz.refresh_marks().await.unwrap();
    quiz.set_pool((1..=pool_size).map(question).collect());
    ViewHarness { quiz, countdown }
}

impl ViewHarness {
    /// Start an interval quiz over `start..=end` so question order is predictable.
    pub async fn start_interval(&mut self, start: u64, end: u64, minutes: u32) {
        let config = QuizConfigDraft {
            count: 10,
            time_limit_minutes: minutes,
            mode: SelectionMode::Interval {
                start: QuestionId::new(start),
                end: QuestionId::new(end),
            },
            answer_policy: AnswerPolicy::Free,
        }
        .validate()
        .unwrap();
        self.quiz.start(config).await.unwrap();
    }

    /// Hand the controller to a `QuizView` mounted in a fresh `VirtualDom`.
    pub fn mount(self, form: StartForm) -> MountedView {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let (pool_tx, pool_rx) = oneshot::channel();
        let context = AppContext::new(self.quiz, form, tick_rx, pool_rx);
        let dom = VirtualDom::new_with_props(
            QuizHarness,
            QuizHarnessProps {
                context: context.clone(),
            },
        );
        MountedView {
            dom,
            context,
            countdown: self.countdown,
            ticks: tick_tx,
            pool: Some(pool_tx),
        }
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    context: AppContext,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let ctx = use_context_provider(|| props.context.clone());
    let state = use_quiz_state_provider(&ctx);
    use_quiz_driver(ctx, state);
    rsx! { QuizView {} }
}

pub struct MountedView {
    pub dom: VirtualDom,
    pub context: AppContext,
    pub countdown: ManualCountdown,
    ticks: mpsc::UnboundedSender<SessionToken>,
    pool: Option<oneshot::Sender<Vec<Question>>>,
}

impl MountedView {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Deliver a countdown tick the way `TokioCountdown` would.
    pub fn send_tick(&self, token: SessionToken) {
        self.ticks.send(token).unwrap();
    }

    /// Resolve the background pool load.
    pub fn finish_pool_load(&mut self, questions: Vec<Question>) {
        if let Some(pool) = self.pool.take() {
            assert!(pool.send(questions).is_ok());
        }
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}
