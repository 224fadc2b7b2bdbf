use once_cell::sync::Lazy;
use std::env;

/// Environment variable holding the upstream bearer credential. It is read on
/// every request rather than at startup.
pub const API_KEY_VAR: &str = "INFER_API_KEY";

pub static PORT: Lazy<u16> = Lazy::new(|| {
    env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()
        .expect("PORT must be a valid port number")
});

pub fn validate() {
    // Trigger the lazy statics to force panics early
    let _ = *PORT;

    if env::var(API_KEY_VAR).map_or(true, |key| key.trim().is_empty()) {
        tracing::warn!("{} is not set, conversions will fail until it is", API_KEY_VAR);
    }
}
