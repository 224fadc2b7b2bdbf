use dioxus::prelude::*;

use crate::convert::front::state::{
    actions::{ConvertAction, CopyAction},
    State,
};
use crate::schema::EXAMPLE_QUERIES;

pub static CSS: Asset = asset!("/src/convert/front/components/converter.css");

#[component]
pub fn Converter() -> Element {
    let mut state = use_context::<State>();
    let dispatch_convert = use_coroutine_handle::<ConvertAction>();
    let dispatch_copy = use_coroutine_handle::<CopyAction>();
    let b = classnames::classname("converter");

    let form = state.form.read().clone();
    let input = form.input().to_owned();
    let output = form.output().to_owned();
    let is_loading = form.is_loading();
    let has_output = !output.is_empty();

    rsx! {
        div { class: b.to_string(),
            header { class: b.el("header").to_string(),
                div { class: b.el("badge").to_string(), "AI-Powered SQL Generator" }
                h1 { class: b.el("title").to_string(), "Natural Language to SQL" }
                p { class: b.el("subtitle").to_string(),
                    "Convert plain English questions into SQL queries instantly using AI"
                }
            }
            div { class: b.el("panels").to_string(),
                section { class: b.el("panel").to_string(),
                    label { r#for: "question", "Your Question in English" }
                    textarea {
                        id: "question",
                        class: b.el("question").to_string(),
                        placeholder: "e.g., Show all customers who ordered in the last month...",
                        value: "{input}",
                        disabled: is_loading,
                        oninput: move |evt| state.form.with_mut(|form| form.set_input(evt.value())),
                    }
                    button {
                        class: b.el("convert").to_string(),
                        disabled: !form.can_submit(),
                        onclick: move |_| dispatch_convert.send(ConvertAction),
                        if is_loading { "Converting..." } else { "Convert to SQL" }
                    }
                    label { "Try These Examples:" }
                    div { class: b.el("examples").to_string(),
                        for example in EXAMPLE_QUERIES.iter().copied() {
                            button {
                                key: "{example}",
                                class: b.el("example").to_string(),
                                disabled: is_loading,
                                onclick: move |_| state.form.with_mut(|form| form.use_example(example)),
                                "{example}"
                            }
                        }
                    }
                }
                section { class: b.el("panel").to_string(),
                    div { class: b.el("output-header").to_string(),
                        label { "Generated SQL Query" }
                        if has_output {
                            button {
                                class: b.el("copy").to_string(),
                                onclick: move |_| dispatch_copy.send(CopyAction),
                                if form.is_copied() { "Copied" } else { "Copy" }
                            }
                        }
                    }
                    if has_output {
                        pre { class: b.el("sql").to_string(), "{output}" }
                    } else {
                        div { class: b.el("placeholder").to_string(),
                            if is_loading { "Generating SQL..." } else { "Your SQL query will appear here" }
                        }
                    }
                }
            }
        }
    }
}
