use crate::helpers::{StubProvider, TestContext};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn it_should_report_liveness() {
    let ctx = TestContext::spawn(None).await;

    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert!(response.header("x-request-id").is_some());
}

#[tokio::test]
async fn it_should_stay_ready_without_a_credential() {
    let ctx = TestContext::spawn(None).await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(Value::as_str), Some("ready"));
    assert_eq!(
        body.get("provider").and_then(Value::as_str),
        Some("fallback-only")
    );
}

#[tokio::test]
async fn it_should_report_a_configured_provider() {
    let provider = StubProvider::new(vec![0xFF, 0xFB]);
    let ctx = TestContext::spawn(Some(provider)).await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body.get("provider").and_then(Value::as_str),
        Some("configured")
    );
}
