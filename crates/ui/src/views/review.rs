use dioxus::prelude::*;

use crate::intent::QuizIntent;
use crate::vm::{OptionStyle, ReviewItemVm, ReviewVm};

#[component]
pub fn ReviewScreen(vm: ReviewVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-review",
            h2 { class: "quiz-review__title", "Review" }
            for item in vm.items.iter().cloned() {
                ReviewItemCard { key: "{item.question_id}", item, on_intent }
            }
            footer { class: "quiz-review__actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::BackToResults),
                    "Back to results"
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

const fn option_class(style: OptionStyle) -> &'static str {
    match style {
        OptionStyle::Plain => "quiz-review__option",
        OptionStyle::Correct => "quiz-review__option quiz-review__option--correct",
        OptionStyle::Wrong => "quiz-review__option quiz-review__option--wrong",
    }
}

#[component]
fn ReviewItemCard(item: ReviewItemVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let id = item.question_id;
    rsx! {
        article { class: "quiz-review__item",
            h3 { "{item.title}" }
            ul {
                for line in item.lines.iter().cloned() {
                    li {
                        class: option_class(line.style),
                        "{line.text}"
                        if let Some(note) = line.style.note() {
                            em { " ({note})" }
                        }
                    }
                }
            }
            button {
                class: if item.marked { "quiz-mark quiz-mark--on" } else { "quiz-mark" },
                r#type: "button",
                aria_pressed: "{item.marked}",
                onclick: move |_| on_intent.call(QuizIntent::ToggleMark(id)),
                "{item.mark_label}"
            }
        }
    }
}
