use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use uuid::Uuid;

use super::AppState;
use crate::{
    convert::{
        dto::{ConvertRequest, ConvertResponse},
        CONVERT_PATH,
    },
    prompts,
    service::{self, CoercibleResult},
};

const ALLOW_ORIGIN: &str = "*";
const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

pub fn build_router(state: Arc<AppState>) -> Router {
    // The form is served from another origin, so every response carries these
    let cors_origin = SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    let cors_headers = SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );

    Router::new()
        .route("/health", get(health_check))
        .route(CONVERT_PATH, post(convert_handler).options(preflight_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors_origin)
        .layer(cors_headers)
        .with_state(state)
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

pub async fn preflight_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn convert_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> service::Result<Json<ConvertResponse>> {
    let request: ConvertRequest = serde_json::from_slice(&body).into_service_result()?;
    let api_key = state.api_key.resolve()?;

    tracing::info!("Converting natural language to SQL: {}", request.query);

    let messages = [prompts::system(), prompts::user(&request.query)];
    let sql = state.client.complete(&api_key, &messages).await?;

    tracing::info!("Generated SQL: {}", sql);
    Ok(Json(ConvertResponse { sql: sql.into() }))
}
