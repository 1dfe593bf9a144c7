use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HelpView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
        #[route("/help", HelpView)] Help {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            nav { class: "sidebar",
                h1 { "Quiz" }
                ul {
                    li { Link { to: Route::Quiz {}, "Quiz" } }
                    li { Link { to: Route::Help {}, "Help" } }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
