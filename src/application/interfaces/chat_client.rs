use async_trait::async_trait;

use crate::domain::{DomainError, UpstreamChat};

/// An interface for sending a seeded chat turn to a generative model and
/// receiving its text reply.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. [`crate::application::GenerateReplyUseCase`] stays decoupled from
/// any particular provider or HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Start a chat seeded with `chat.history()`, send `chat.message()` and
    /// return the model's reply text. `credential` is the provider API key.
    async fn send(&self, credential: &str, chat: &UpstreamChat) -> Result<String, DomainError>;
}
