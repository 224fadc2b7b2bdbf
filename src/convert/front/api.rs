use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use std::time::Duration;

use crate::convert::client::HttpConvertClient;
use crate::convert::form::{Clipboard, ClipboardError};

static BASE_URL: &str = dotenvy_macro::dotenv!("CONVERT_BASE_URL");

pub fn client() -> HttpConvertClient {
    HttpConvertClient::new(BASE_URL)
}

/// The browser (or webview) clipboard.
pub struct WebClipboard;

impl Clipboard for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let eval = document::eval(
            r#"
            const text = await dioxus.recv();
            await navigator.clipboard.writeText(text);
            return true;
            "#,
        );
        eval.send(text)
            .map_err(|e| ClipboardError(e.to_string().into()))?;
        eval.await
            .map(|_| ())
            .map_err(|e| ClipboardError(e.to_string().into()))
    }
}

/// Timer that works on every dioxus renderer, tokio or not.
pub async fn sleep(duration: Duration) {
    let script = format!(
        "await new Promise(resolve => setTimeout(resolve, {})); return null;",
        duration.as_millis()
    );
    if let Err(e) = document::eval(&script).await {
        error!("Timer failed: {}", e);
    }
}
