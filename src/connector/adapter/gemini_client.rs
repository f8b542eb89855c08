use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{DomainError, GenerationConfig, UpstreamChat, UpstreamMessage};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: Vec<UpstreamMessage>,
    generation_config: &'a GenerationConfig,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// HTTP client for the Gemini `generateContent` API.
///
/// Each [`ChatClient::send`] posts the seeded history plus the outgoing
/// message as one `contents` array, which is what a chat session with that
/// history would send. The API key travels in the `x-goog-api-key` header.
///
/// No timeout is configured: a hung upstream call lasts as long as the
/// transport allows.
pub struct GeminiClient {
    client: reqwest::Client,
    model: String,
    /// Base URL without trailing slash.
    base_url: String,
}

impl GeminiClient {
    pub fn new(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            model: model.into(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    /// Concatenates the text parts of the first candidate.
    fn reply_text(response: ApiResponse) -> Result<String, DomainError> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::upstream("GeminiClient: response has no candidates"))?;

        Ok(candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
            .unwrap_or_default())
    }
}

#[async_trait]
impl ChatClient for GeminiClient {
    async fn send(&self, credential: &str, chat: &UpstreamChat) -> Result<String, DomainError> {
        let request = ApiRequest {
            contents: chat.contents(),
            generation_config: chat.generation(),
        };

        debug!("GeminiClient: POST {} ({} contents)", self.url(), request.contents.len());

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", credential)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("GeminiClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GeminiClient: API returned {status}: {body}");
            return Err(DomainError::upstream(format!(
                "GeminiClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::upstream(format!("GeminiClient: failed to parse response: {e}"))
        })?;

        Self::reply_text(api_response)
    }
}
