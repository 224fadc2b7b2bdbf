use dioxus::prelude::*;

use crate::convert::front::state::State;

pub static CSS: Asset = asset!("/src/convert/front/components/toasts.css");

#[component]
pub fn Toasts() -> Element {
    let state = use_context::<State>();
    let b = classnames::classname("toasts");

    let entries = state.toasts.read().clone();
    let toasts = entries.into_iter().map(|entry| {
        let id = entry.id;
        let modifier = if entry.toast.is_error() { "error" } else { "success" };
        let class = format!("{0} {0}--{1}", b.el("toast"), modifier);
        let text = entry.toast.text();
        rsx! {
            div {
                key: "{id}",
                class: class,
                role: "status",
                onclick: move |_| state.dismiss_toast(id),
                "{text}"
            }
        }
    });

    rsx! {
        div { class: b.to_string(), {toasts} }
    }
}
