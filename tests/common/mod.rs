#![allow(dead_code)]

use std::sync::Arc;

use socratic::connector::serve;
use socratic::connector::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use socratic::{ChatClient, Container, ContainerConfig, GenerationConfig};
use tokio::net::TcpListener;

pub const TEST_KEY: &str = "test-key";

pub fn config(api_key: Option<&str>) -> ContainerConfig {
    ContainerConfig {
        api_key: api_key.map(String::from),
        model: DEFAULT_MODEL.to_string(),
        base_url: DEFAULT_BASE_URL.to_string(),
        mock_upstream: false,
        generation: GenerationConfig::default(),
    }
}

/// Starts a proxy on an ephemeral port and returns its base URL.
pub async fn spawn_proxy(api_key: Option<&str>, chat_client: Arc<dyn ChatClient>) -> String {
    let container = Container::with_chat_client(config(api_key), chat_client);
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(serve(Arc::new(container), listener));
    format!("http://{addr}")
}
