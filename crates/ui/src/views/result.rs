use dioxus::prelude::*;

use crate::intent::QuizIntent;
use crate::vm::ResultVm;

#[component]
pub fn ResultScreen(vm: ResultVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-result",
            h2 { class: "quiz-result__headline", "{vm.headline}" }
            if vm.is_empty {
                p { class: "quiz-result__empty", "Change the settings and start again." }
            } else {
                p { class: "quiz-result__score", "{vm.score_label}" }
                p { class: "quiz-result__percentage", "{vm.percentage_label}" }
                if let Some(at) = vm.completed_at_str.clone() {
                    p { class: "quiz-result__time", "Finished at {at}" }
                }
                if !vm.mistakes.is_empty() {
                    h3 { "Mistakes" }
                    ul { class: "quiz-mistakes",
                        for mistake in vm.mistakes.iter().cloned() {
                            li { class: "quiz-mistake",
                                p { class: "quiz-mistake__title", "{mistake.title}" }
                                p { class: "quiz-mistake__chosen", "Your answer: {mistake.chosen}" }
                                p { class: "quiz-mistake__correct", "Correct: {mistake.correct}" }
                            }
                        }
                    }
                }
            }
            footer { class: "quiz-result__actions",
                if !vm.is_empty {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Review),
                        "Review answers"
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Restart),
                    "New quiz"
                }
            }
        }
    }
}
