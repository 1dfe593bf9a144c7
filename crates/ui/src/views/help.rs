use dioxus::prelude::*;

#[component]
pub fn HelpView() -> Element {
    rsx! {
        div { class: "page help-page",
            h2 { "How it works" }
            dl {
                dt { "Start" }
                dd { "Pick how many questions to draw, the time limit (0 turns the timer off) and the order: random, an interval of question numbers, or only the questions marked for review." }
                dt { "Answering" }
                dd { "Choose an option, then move with Next, Previous or the numbered strip. With \"first answer is final\" on, an answer cannot be changed." }
                dt { "Results" }
                dd { "Finish, or let the timer run out, to see the score and the questions you missed." }
                dt { "Review" }
                dd { "Every question is listed with the correct option. Marks are saved and can be drilled later with the \"Marked only\" order." }
            }
        }
    }
}
