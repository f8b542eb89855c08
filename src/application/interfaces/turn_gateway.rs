use async_trait::async_trait;

use crate::domain::{DomainError, Transcript};

/// The client's view of the proxy: one call per user turn.
///
/// Failures must distinguish [`DomainError::Network`] (the request never got
/// an HTTP answer) from [`DomainError::Http`] (non-2xx answer, with the
/// server's `error` text when present).
#[async_trait]
pub trait TurnGateway: Send + Sync {
    async fn generate(&self, transcript: &Transcript) -> Result<String, DomainError>;
}
