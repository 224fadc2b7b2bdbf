use dioxus::prelude::*;

mod converter;
mod schema_card;
mod toasts;

pub use converter::Converter;
pub use schema_card::SchemaCard;
pub use toasts::Toasts;

#[component]
pub fn Style() -> Element {
    rsx! {
        document::Stylesheet { href: converter::CSS }
        document::Stylesheet { href: schema_card::CSS }
        document::Stylesheet { href: toasts::CSS }
    }
}
