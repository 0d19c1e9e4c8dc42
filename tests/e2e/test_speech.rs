use crate::helpers::{FailingProvider, StubProvider, TestContext};
use reqwest::StatusCode;
use serde_json::json;

const MP3_AUDIO: &[u8] = &[0xFF, 0xFB, 0x90, 0x64, 0x00, 0x00, 0x01, 0x02];

#[tokio::test]
async fn it_should_reject_empty_text() {
    let provider = StubProvider::new(MP3_AUDIO.to_vec());
    let ctx = TestContext::spawn(Some(provider.clone())).await;

    let response = ctx
        .client
        .post("/text-to-speech", &json!({ "text": "" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Text is required");
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn it_should_reject_a_missing_text_field() {
    let provider = StubProvider::new(MP3_AUDIO.to_vec());
    let ctx = TestContext::spawn(Some(provider.clone())).await;

    let response = ctx.client.post("/text-to-speech", &json!({})).await.unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Text is required");
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn it_should_fall_back_when_no_credential_is_configured() {
    let ctx = TestContext::spawn(None).await;

    let response = ctx
        .client
        .post("/text-to-speech", &json!({ "text": "Hazard ahead" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_fallback("Hazard ahead");
}

#[tokio::test]
async fn it_should_return_audio_when_the_provider_succeeds() {
    let provider = StubProvider::new(MP3_AUDIO.to_vec());
    let ctx = TestContext::spawn(Some(provider.clone())).await;

    let response = ctx
        .client
        .post(
            "/text-to-speech",
            &json!({ "text": "There is a hazard detected in front of you." }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg")
        .assert_header("content-length", &MP3_AUDIO.len().to_string());
    assert_eq!(response.body_bytes, MP3_AUDIO);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn it_should_fall_back_when_the_provider_errors() {
    let provider = FailingProvider::new(StatusCode::SERVICE_UNAVAILABLE);
    let ctx = TestContext::spawn(Some(provider)).await;

    let response = ctx
        .client
        .post("/text-to-speech", &json!({ "text": "Hazard ahead" }))
        .await
        .unwrap();

    // The provider's status must not leak into the gateway's status
    response
        .assert_status(StatusCode::OK)
        .assert_fallback("Hazard ahead");
}

#[tokio::test]
async fn it_should_answer_identical_requests_with_the_same_shape() {
    let ctx = TestContext::spawn(None).await;

    let first = ctx
        .client
        .post("/text-to-speech", &json!({ "text": "Hazard ahead" }))
        .await
        .unwrap();
    let second = ctx
        .client
        .post("/text-to-speech", &json!({ "text": "Hazard ahead" }))
        .await
        .unwrap();

    first.assert_status(StatusCode::OK);
    second.assert_status(StatusCode::OK);
    assert_eq!(first.body, second.body);
}
