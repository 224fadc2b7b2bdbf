mod common;

use axum::http::StatusCode;
use serde_json::json;

use text2sql::convert::client::{ConvertClientTrait, ConvertError, HttpConvertClient};
use text2sql::convert::dto::ConvertRequest;
use text2sql::convert::form::{self, FormState, Toast};

use common::*;

async fn client_for(upstream: &FakeUpstream) -> HttpConvertClient {
    HttpConvertClient::new(serve(relay_with_key(&upstream.url)).await)
}

fn request(query: &str) -> ConvertRequest {
    ConvertRequest {
        query: query.into(),
    }
}

#[tokio::test]
async fn success_returns_the_generated_sql() {
    let upstream = spawn_upstream(StatusCode::OK, completion("SELECT * FROM products p;")).await;
    let client = client_for(&upstream).await;

    let sql = client.convert(&request("Show all products")).await.unwrap();

    assert_eq!(sql, "SELECT * FROM products p;");
}

#[tokio::test]
async fn relay_statuses_classify_errors() {
    let cases = [
        (StatusCode::TOO_MANY_REQUESTS, "rate"),
        (StatusCode::PAYMENT_REQUIRED, "quota"),
        (StatusCode::INTERNAL_SERVER_ERROR, "failed"),
    ];

    for (status, expected) in cases {
        let upstream = spawn_upstream(status, json!({})).await;
        let client = client_for(&upstream).await;

        let error = client.convert(&request("anything")).await.unwrap_err();

        let kind = match error {
            ConvertError::RateLimited(_) => "rate",
            ConvertError::QuotaExhausted(_) => "quota",
            ConvertError::Failed(_) => "failed",
        };
        assert_eq!(kind, expected, "for upstream {}", status);
    }
}

#[tokio::test]
async fn relay_error_text_is_kept() {
    let upstream = spawn_upstream(StatusCode::PAYMENT_REQUIRED, json!({})).await;
    let client = client_for(&upstream).await;

    let error = client.convert(&request("anything")).await.unwrap_err();

    assert_eq!(
        error,
        ConvertError::QuotaExhausted("AI credits depleted. Please add credits to continue.".into())
    );
}

#[tokio::test]
async fn missing_credential_is_a_generic_failure() {
    let upstream = spawn_upstream(StatusCode::OK, completion("SELECT 1;")).await;
    let client = HttpConvertClient::new(serve(relay_without_key(&upstream.url)).await);

    let error = client.convert(&request("anything")).await.unwrap_err();

    assert!(matches!(error, ConvertError::Failed(_)));
}

#[tokio::test]
async fn unreachable_relay_is_a_generic_failure() {
    let client = HttpConvertClient::new(dead_url().await);

    let error = client.convert(&request("anything")).await.unwrap_err();

    assert!(matches!(error, ConvertError::Failed(_)));
}

#[tokio::test]
async fn form_round_trip_through_the_relay() {
    let sql = "SELECT p.category,\n       SUM(oi.quantity * oi.unit_price) AS total_sales\n  FROM products p\n  JOIN order_items oi ON oi.product_id = p.id\n GROUP BY p.category;";
    let upstream = spawn_upstream(StatusCode::OK, completion(sql)).await;
    let client = client_for(&upstream).await;
    let mut state = FormState::new();
    state.use_example("Find total sales for each product category");

    let toast = form::submit(&mut state, &client).await;

    assert_eq!(toast, Toast::Success(form::CONVERTED));
    assert_eq!(state.output(), sql);
    assert_eq!(state.copy_text(), Some(sql));
    assert_eq!(
        upstream.calls()[0].request["messages"][1]["content"],
        "Find total sales for each product category"
    );
}

#[tokio::test]
async fn form_shows_rate_limit_toast() {
    let upstream = spawn_upstream(StatusCode::TOO_MANY_REQUESTS, json!({})).await;
    let client = client_for(&upstream).await;
    let mut state = FormState::new();
    state.set_input("anything");

    let toast = form::submit(&mut state, &client).await;

    assert_eq!(toast, Toast::Error(form::RATE_LIMITED));
    assert_eq!(state.output(), "");
    assert!(!state.is_loading());
}
