//! HTTP-level tests for the `/api/generate` proxy endpoint.

mod common;

use std::sync::Arc;

use serde_json::{json, Value};
use socratic::domain::SOCRATIC_INSTRUCTION;
use socratic::MockChatClient;

use common::{spawn_proxy, TEST_KEY};

async fn post(base: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{base}/api/generate"))
        .json(&body)
        .send()
        .await
        .expect("request");
    let status = response.status().as_u16();
    let body = response.json().await.expect("json body");
    (status, body)
}

#[tokio::test]
async fn empty_messages_is_bad_request() {
    let upstream = Arc::new(MockChatClient::with_reply("unused"));
    let base = spawn_proxy(Some(TEST_KEY), upstream.clone()).await;

    let (status, body) = post(&base, json!({ "messages": [] })).await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({ "error": "Invalid or empty messages array" }));
    assert!(upstream.calls().is_empty());
}

#[tokio::test]
async fn missing_or_non_array_messages_is_bad_request() {
    let base = spawn_proxy(Some(TEST_KEY), Arc::new(MockChatClient::new())).await;

    for body in [json!({}), json!({ "messages": "Hi" }), json!({ "messages": null })] {
        let (status, reply) = post(&base, body).await;
        assert_eq!(status, 400);
        assert_eq!(reply["error"], "Invalid or empty messages array");
    }
}

#[tokio::test]
async fn missing_credential_is_server_error_without_upstream_call() {
    let upstream = Arc::new(MockChatClient::with_reply("unused"));
    let base = spawn_proxy(None, upstream.clone()).await;

    let (status, body) = post(
        &base,
        json!({ "messages": [{ "sender": "user", "content": "Hi" }] }),
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(body["error"], "API key is not configured");
    assert!(upstream.calls().is_empty());
}

#[tokio::test]
async fn maps_history_and_prepends_instruction() {
    let upstream = Arc::new(MockChatClient::with_reply("What is a pointer?"));
    let base = spawn_proxy(Some(TEST_KEY), upstream.clone()).await;

    let (status, body) = post(
        &base,
        json!({ "messages": [
            { "sender": "user", "content": "Teach me linked lists" },
            { "sender": "bot", "content": "What do you know about arrays?" },
            { "sender": "user", "content": "They are contiguous" },
        ]}),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "response": "What is a pointer?" }));

    let calls = upstream.calls();
    assert_eq!(calls.len(), 1);
    let chat = &calls[0];
    assert_eq!(chat.history().len(), 2);
    assert_eq!(chat.history()[0].role, "user");
    assert_eq!(chat.history()[0].text(), "Teach me linked lists");
    assert_eq!(chat.history()[1].role, "model");
    assert_eq!(chat.history()[1].text(), "What do you know about arrays?");
    assert_eq!(
        chat.message(),
        format!("{SOCRATIC_INSTRUCTION}\n\nThey are contiguous")
    );
    assert_eq!(chat.generation().max_output_tokens, 8000);
    assert_eq!(upstream.credentials(), vec![TEST_KEY.to_string()]);
}

#[tokio::test]
async fn upstream_failure_returns_generic_error() {
    let upstream = Arc::new(MockChatClient::failing("429 RESOURCE_EXHAUSTED: quota"));
    let base = spawn_proxy(Some(TEST_KEY), upstream).await;

    let (status, body) = post(
        &base,
        json!({ "messages": [{ "sender": "user", "content": "Hi" }] }),
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Failed to generate content" }));
}

#[tokio::test]
async fn health_route_answers() {
    let base = spawn_proxy(None, Arc::new(MockChatClient::new())).await;

    let text = reqwest::get(format!("{base}/"))
        .await
        .expect("request")
        .text()
        .await
        .expect("text");

    assert_eq!(text, "Hello, World!");
}

#[tokio::test]
async fn concurrent_sessions_are_independent() {
    let upstream = Arc::new(MockChatClient::new());
    let base = spawn_proxy(Some(TEST_KEY), upstream.clone()).await;

    let requests = (0..8).map(|i| {
        let base = base.clone();
        async move {
            post(
                &base,
                json!({ "messages": [{ "sender": "user", "content": format!("topic {i}") }] }),
            )
            .await
        }
    });
    let replies = futures_util::future::join_all(requests).await;

    for (i, (status, body)) in replies.into_iter().enumerate() {
        assert_eq!(status, 200);
        assert_eq!(
            body["response"],
            format!("What makes you ask about \"topic {i}\"?")
        );
    }
    assert_eq!(upstream.calls().len(), 8);
}
