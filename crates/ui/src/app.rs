use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::{AppContext, use_quiz_state_provider};
use crate::routes::Route;
use crate::views::use_quiz_driver;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_quiz_state_provider(&ctx);
    use_quiz_driver(ctx, state);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Quiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
