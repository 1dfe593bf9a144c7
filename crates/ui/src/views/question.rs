use dioxus::prelude::*;

use crate::intent::QuizIntent;
use crate::vm::{OptionVm, QuestionVm, StepVm};

#[component]
pub fn QuestionScreen(vm: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let can_go_back = vm.can_go_back;
    let is_last = vm.is_last;

    rsx! {
        section { class: "quiz-question",
            header { class: "quiz-question__header",
                h2 { class: "quiz-question__title", "{vm.header}" }
                span { class: "quiz-question__answered", "{vm.answered_label}" }
                if let Some(timer) = vm.timer_label.clone() {
                    span { class: "quiz-timer", id: "quiz-timer", "{timer}" }
                }
            }
            p { class: "quiz-question__prompt", "{vm.prompt}" }
            div { class: "quiz-options",
                for option in vm.options.iter().cloned() {
                    OptionButton { key: "{option.label}", option, on_intent }
                }
            }
            if let Some(chosen) = vm.chosen_label.clone() {
                p { class: "quiz-question__chosen", "{chosen}" }
            }
            nav { class: "quiz-steps", aria_label: "Questions",
                for step in vm.steps.iter().copied() {
                    StepButton { key: "{step.position}", step, on_intent }
                }
            }
            footer { class: "quiz-question__footer",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !can_go_back,
                    onclick: move |_| on_intent.call(QuizIntent::Previous),
                    "Previous"
                }
                if !is_last {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Next),
                        "Next"
                    }
                }
                button {
                    class: "btn btn-primary",
                    id: "quiz-finish",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Finish),
                    "Finish"
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let label = option.label;
    rsx! {
        button {
            class: if option.selected { "quiz-option quiz-option--selected" } else { "quiz-option" },
            r#type: "button",
            aria_pressed: "{option.selected}",
            onclick: move |_| on_intent.call(QuizIntent::Answer(label)),
            "{label}) {option.text}"
        }
    }
}

#[component]
fn StepButton(step: StepVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let class = match (step.current, step.answered) {
        (true, _) => "quiz-step quiz-step--current",
        (false, true) => "quiz-step quiz-step--answered",
        (false, false) => "quiz-step",
    };
    let number = step.position + 1;
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_intent.call(QuizIntent::GoTo(step.position)),
            "{number}"
        }
    }
}
