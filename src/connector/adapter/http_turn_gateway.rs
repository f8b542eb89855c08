use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::TurnGateway;
use crate::domain::{DomainError, Transcript};

pub const GENERATE_PATH: &str = "/api/generate";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    messages: &'a Transcript,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// [`TurnGateway`] that POSTs the transcript to a running proxy.
pub struct HttpTurnGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpTurnGateway {
    /// `base_url` is the proxy origin, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            url: format!("{}{}", base.trim_end_matches('/'), GENERATE_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TurnGateway for HttpTurnGateway {
    async fn generate(&self, transcript: &Transcript) -> Result<String, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .json(&GenerateRequest {
                messages: transcript,
            })
            .send()
            .await
            .map_err(|e| DomainError::network(format!("request to {} failed: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            // A body that isn't the documented error shape still counts as an
            // HTTP-level failure, just without a server message.
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error);
            debug!("Proxy returned {status}: {message:?}");
            return Err(DomainError::http(status.as_u16(), message));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DomainError::network(format!("malformed proxy response: {e}")))?;

        Ok(body.response)
    }
}
