use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tracing::info;

use super::container::Container;
use super::controller::{generate, health};
use crate::connector::GENERATE_PATH;

/// Builds the proxy's routes over a shared container.
pub fn router(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/", get(health))
        .route(GENERATE_PATH, post(generate))
        .with_state(container)
}

/// Serves the proxy on `listener` until the process is stopped.
pub async fn serve(container: Arc<Container>, listener: TcpListener) -> Result<()> {
    let addr: SocketAddr = listener.local_addr()?;
    info!("Socratic proxy listening on http://{addr}");
    axum::serve(listener, router(container)).await?;
    Ok(())
}
