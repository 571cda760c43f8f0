mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

// The test server's CHAT_API_URL points at a local mock upstream whose
// behavior is keyed off the question text (see tests/common/mod.rs), so
// every branch of the proxy contract is reachable without the network.

#[tokio::test]
async fn missing_body_is_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/chat", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Question is required");

    Ok(())
}

#[tokio::test]
async fn missing_question_is_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for payload in [json!({}), json!({ "question": "" }), json!({ "question": "   " })] {
        let res = client
            .post(format!("{}/api/chat", server.base_url))
            .json(&payload)
            .send()
            .await?;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
    }

    Ok(())
}

#[tokio::test]
async fn upstream_answer_is_relayed_verbatim() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/chat", server.base_url))
        .json(&json!({ "question": "what is rust" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    // Verbatim passthrough: the upstream body, no envelope around it
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({ "answer": "x" }));

    Ok(())
}

#[tokio::test]
async fn upstream_error_status_is_relayed() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/chat", server.base_url))
        .json(&json!({ "question": "upstream-unavailable" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body.get("error").is_some(), "error field expected: {}", body);

    Ok(())
}

#[tokio::test]
async fn upstream_timeout_maps_to_408() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/chat", server.base_url))
        .json(&json!({ "question": "upstream-slow" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "REQUEST_TIMEOUT");

    Ok(())
}
