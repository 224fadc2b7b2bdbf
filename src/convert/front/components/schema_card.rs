use dioxus::prelude::*;

use crate::schema::SAMPLE_SCHEMA;

pub static CSS: Asset = asset!("/src/convert/front/components/schema_card.css");

#[component]
pub fn SchemaCard() -> Element {
    let b = classnames::classname("schema-card");

    let tables = SAMPLE_SCHEMA.iter().map(|table| {
        let name = table.name;
        let columns = table.columns.iter().map(|column| rsx! { li { key: "{column}", "{column}" } });
        rsx! {
            div { key: "{name}", class: b.el("table").to_string(),
                div { class: b.el("table-name").to_string(), "{name}" }
                ul { class: b.el("columns").to_string(), {columns} }
            }
        }
    });

    rsx! {
        section { class: b.to_string(),
            h3 { "Sample Database Schema" }
            div { class: b.el("tables").to_string(), {tables} }
        }
    }
}
