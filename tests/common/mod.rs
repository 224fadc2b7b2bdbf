#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use text2sql::convert::back::{build_router, ApiKeySource, AppState};
use text2sql::infer::Client;

pub const TEST_MODEL: &str = "test/model";
pub const TEST_KEY: &str = "test-key";
pub const UNSET_KEY_VAR: &str = "TEXT2SQL_TEST_UNSET_API_KEY";

/// What the fake gateway received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub authorization: Option<String>,
    pub request: Value,
}

pub struct FakeUpstream {
    pub url: String,
    pub seen: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeUpstream {
    pub fn calls(&self) -> Vec<Recorded> {
        self.seen.lock().unwrap().clone()
    }
}

pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
        ]
    })
}

/// Serves `/v1/chat/completions` on an ephemeral port, always answering with
/// `status` and `body`.
pub async fn spawn_upstream(status: StatusCode, body: Value) -> FakeUpstream {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();

    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(request): Json<Value>| {
            let recorder = recorder.clone();
            let body = body.clone();
            async move {
                recorder.lock().unwrap().push(Recorded {
                    authorization: headers
                        .get(AUTHORIZATION)
                        .and_then(|value| value.to_str().ok())
                        .map(str::to_owned),
                    request,
                });
                (status, Json(body))
            }
        }),
    );

    let url = serve(app).await;
    FakeUpstream { url, seen }
}

/// Binds `app` on 127.0.0.1 and returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL nothing listens on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn relay(infer_url: &str, api_key: ApiKeySource) -> Router {
    build_router(Arc::new(AppState::new(Client::new(infer_url, TEST_MODEL), api_key)))
}

pub fn relay_with_key(infer_url: &str) -> Router {
    relay(infer_url, ApiKeySource::Fixed(TEST_KEY.into()))
}

pub fn relay_without_key(infer_url: &str) -> Router {
    relay(infer_url, ApiKeySource::Env(UNSET_KEY_VAR.into()))
}
