use dioxus::prelude::*;

mod api;
mod components;
mod state;

use components::{Converter, SchemaCard, Style, Toasts};

#[component]
pub fn App() -> Element {
    state::use_app_state();
    state::actions::use_app_actions();

    rsx! {
        Style {}
        main { class: "page",
            Converter {}
            SchemaCard {}
        }
        Toasts {}
    }
}
