//! Chat session -> HTTP gateway -> proxy -> mocked upstream.

mod common;

use std::sync::Arc;

use socratic::{ChatSession, HttpTurnGateway, MockChatClient, SubmitOutcome, Turn};

use common::{spawn_proxy, TEST_KEY};

#[tokio::test]
async fn hi_gets_hello_back() {
    let upstream = Arc::new(MockChatClient::with_reply("Hello!"));
    let base = spawn_proxy(Some(TEST_KEY), upstream.clone()).await;
    let mut session = ChatSession::new(Arc::new(HttpTurnGateway::new(base)));

    let outcome = session.submit("Hi").await;

    assert_eq!(outcome, SubmitOutcome::Replied);
    assert_eq!(
        session.transcript().turns(),
        &[Turn::user("Hi"), Turn::assistant("Hello!")]
    );
    assert!(upstream.calls()[0].history().is_empty());
}

#[tokio::test]
async fn second_turn_resends_history() {
    let upstream = Arc::new(MockChatClient::with_reply("Why?"));
    let base = spawn_proxy(Some(TEST_KEY), upstream.clone()).await;
    let mut session = ChatSession::new(Arc::new(HttpTurnGateway::new(base)));

    session.submit("Hi").await;
    session.submit("Because").await;

    assert_eq!(session.transcript().len(), 4);
    let second = &upstream.calls()[1];
    assert_eq!(second.history().len(), 2);
    assert_eq!(second.history()[1].role, "model");
    assert_eq!(second.history()[1].text(), "Why?");
}

#[tokio::test]
async fn server_error_message_reaches_the_session() {
    let base = spawn_proxy(None, Arc::new(MockChatClient::new())).await;
    let mut session = ChatSession::new(Arc::new(HttpTurnGateway::new(base)));

    let outcome = session.submit("Hi").await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(session.transcript().turns(), &[Turn::user("Hi")]);
    assert_eq!(session.state().error(), Some("API key is not configured"));
}

#[tokio::test]
async fn unreachable_proxy_is_a_network_failure() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let mut session = ChatSession::new(Arc::new(HttpTurnGateway::new(format!("http://{addr}"))));

    session.submit("Hi").await;

    assert_eq!(session.transcript().len(), 1);
    assert_eq!(
        session.state().error(),
        Some(socratic::application::GENERIC_NETWORK_ERROR)
    );
}
