use dioxus::prelude::*;
use services::TickOutcome;

use crate::actions::apply_intent;
use crate::context::{AppContext, QuizState};
use crate::intent::QuizIntent;
use crate::views::{QuestionScreen, ResultScreen, ReviewScreen, StartScreen};
use crate::vm::ScreenVm;

/// Feed countdown ticks and the background pool load into the controller.
///
/// Mount this once, above the router, so route changes do not stop the clock.
pub fn use_quiz_driver(ctx: AppContext, state: QuizState) {
    let tick_ctx = ctx.clone();
    use_future(move || {
        let ctx = tick_ctx.clone();
        async move {
            let receiver = ctx.ticks();
            let mut ticks = receiver.lock().await;
            while let Some(token) = ticks.recv().await {
                let quiz = ctx.quiz();
                let mut quiz = quiz.lock().await;
                match quiz.tick(token) {
                    TickOutcome::Ignored => {}
                    TickOutcome::Expired => {
                        tracing::info!("time is up");
                        state.show(&quiz);
                    }
                    TickOutcome::Remaining(_) => state.show(&quiz),
                }
            }
        }
    });

    use_future(move || {
        let ctx = ctx.clone();
        async move {
            let Some(pool) = ctx.take_pool() else {
                return;
            };
            let questions = pool.await.unwrap_or_default();
            let quiz = ctx.quiz();
            let mut quiz = quiz.lock().await;
            quiz.set_pool(questions);
            state.show(&quiz);
        }
    });
}

fn use_dispatch(ctx: AppContext, state: QuizState) -> Callback<QuizIntent> {
    use_callback(move |intent: QuizIntent| {
        let quiz = ctx.quiz();
        let mut state = state;
        spawn(async move {
            let mut quiz = quiz.lock().await;
            let mut form = *state.form.peek();
            let notice = apply_intent(&mut quiz, &mut form, intent).await;
            state.form.set(form);
            state.notice.set(notice);
            state.show(&quiz);
        });
    })
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<QuizState>();
    let dispatch = use_dispatch(ctx, state);

    let screen = state.screen.read().clone();
    let form = *state.form.read();
    let notice = state.notice.read().clone();

    rsx! {
        div { class: "page quiz-page",
            if let Some(message) = notice {
                p { class: "quiz-notice", role: "status", "{message}" }
            }
            match screen {
                ScreenVm::Start(vm) => rsx! {
                    StartScreen { vm, form, on_intent: dispatch }
                },
                ScreenVm::Question(vm) => rsx! {
                    QuestionScreen { vm, on_intent: dispatch }
                },
                ScreenVm::Result(vm) => rsx! {
                    ResultScreen { vm, on_intent: dispatch }
                },
                ScreenVm::Review(vm) => rsx! {
                    ReviewScreen { vm, on_intent: dispatch }
                },
            }
        }
    }
}
