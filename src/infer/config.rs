use once_cell::sync::Lazy;
use std::env;

pub static DEFAULT_MODEL: Lazy<Box<str>> = Lazy::new(|| {
    env::var("DEFAULT_MODEL")
        .unwrap_or_else(|_| "google/gemini-2.5-flash".into())
        .into_boxed_str()
});

pub static INFER_URL: Lazy<Box<str>> = Lazy::new(|| {
    env::var("INFER_URL")
        .unwrap_or_else(|_| "https://ai.gateway.lovable.dev".into())
        .into_boxed_str()
});

pub fn validate() {
    // Trigger the lazy statics to force panics early
    let _ = &*DEFAULT_MODEL;
    let _ = &*INFER_URL;
}
