use dioxus::prelude::*;
use quiz_core::model::{ModeKind, QuestionId};

use crate::intent::QuizIntent;
use crate::start_form::StartForm;
use crate::vm::StartVm;

#[component]
pub fn StartScreen(vm: StartVm, form: StartForm, on_intent: EventHandler<QuizIntent>) -> Element {
    let (range_start, range_end) = form.range;
    let locked = form.locked;

    rsx! {
        section { class: "quiz-start",
            h2 { class: "quiz-start__title", "Quiz" }
            p { class: "quiz-start__pool", "{vm.pool_label}" }
            dl { class: "quiz-start__summary",
                dt { "Questions" }
                dd { "{vm.count_label}" }
                dt { "Timer" }
                dd { "{vm.timer_label}" }
                dt { "Order" }
                dd { "{vm.mode_label}" }
                dt { "Answers" }
                dd { "{vm.policy_label}" }
            }
            if let Some(review) = vm.review_label.clone() {
                p { class: "quiz-start__review", "{review}" }
            }

            div { class: "quiz-start__form",
                div { class: "settings-row",
                    label { r#for: "quiz-count", "Questions" }
                    input {
                        id: "quiz-count",
                        class: "settings-input",
                        r#type: "number",
                        min: "1",
                        inputmode: "numeric",
                        value: "{form.count}",
                        oninput: move |evt| {
                            if let Ok(count) = evt.value().trim().parse() {
                                on_intent.call(QuizIntent::SetCount(count));
                            }
                        },
                    }
                }
                div { class: "settings-row",
                    label { r#for: "quiz-minutes", "Minutes (0 = no timer)" }
                    input {
                        id: "quiz-minutes",
                        class: "settings-input",
                        r#type: "number",
                        min: "0",
                        inputmode: "numeric",
                        value: "{form.minutes}",
                        oninput: move |evt| {
                            if let Ok(minutes) = evt.value().trim().parse() {
                                on_intent.call(QuizIntent::SetMinutes(minutes));
                            }
                        },
                    }
                }
                div { class: "quiz-start__modes", role: "radiogroup",
                    ModeButton { label: "Random", mode: ModeKind::Random, active: form.mode, on_intent }
                    ModeButton { label: "Interval", mode: ModeKind::Interval, active: form.mode, on_intent }
                    ModeButton { label: "Marked only", mode: ModeKind::Review, active: form.mode, on_intent }
                }
                if form.mode == ModeKind::Interval {
                    div { class: "settings-row",
                        label { r#for: "quiz-range-start", "From question" }
                        input {
                            id: "quiz-range-start",
                            class: "settings-input",
                            r#type: "number",
                            min: "1",
                            value: "{range_start}",
                            oninput: move |evt| {
                                if let Ok(start) = evt.value().parse::<QuestionId>() {
                                    on_intent.call(QuizIntent::SetRange(start, range_end));
                                }
                            },
                        }
                        label { r#for: "quiz-range-end", "to" }
                        input {
                            id: "quiz-range-end",
                            class: "settings-input",
                            r#type: "number",
                            min: "1",
                            value: "{range_end}",
                            oninput: move |evt| {
                                if let Ok(end) = evt.value().parse::<QuestionId>() {
                                    on_intent.call(QuizIntent::SetRange(range_start, end));
                                }
                            },
                        }
                    }
                }
                div { class: "settings-row settings-row__field--toggle",
                    span { "First answer is final" }
                    button {
                        class: "settings-toggle",
                        r#type: "button",
                        role: "switch",
                        aria_checked: "{locked}",
                        onclick: move |_| on_intent.call(QuizIntent::SetLocked(!locked)),
                    }
                }
            }

            button {
                class: "btn btn-primary",
                id: "quiz-start",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "Start"
            }
        }
    }
}

#[component]
fn ModeButton(
    label: &'static str,
    mode: ModeKind,
    active: ModeKind,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let checked = mode == active;
    rsx! {
        button {
            class: if checked { "quiz-mode quiz-mode--active" } else { "quiz-mode" },
            r#type: "button",
            role: "radio",
            aria_checked: "{checked}",
            onclick: move |_| on_intent.call(QuizIntent::SetMode(mode)),
            "{label}"
        }
    }
}
