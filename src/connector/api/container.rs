use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{ChatClient, GenerateReplyUseCase};
use crate::domain::GenerationConfig;
use crate::connector::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::{GeminiClient, MockChatClient};

/// Process configuration, read once at start and injected into the container.
///
/// | Variable          | Default                                     |
/// |-------------------|---------------------------------------------|
/// | `GEMINI_API_KEY`  | none                                        |
/// | `GEMINI_MODEL`    | `gemini-1.5-flash`                          |
/// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com` |
pub struct ContainerConfig {
    /// Upstream provider API key. `None` makes every generate request fail
    /// as misconfigured.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Answer from an in-process mock instead of calling Gemini.
    pub mock_upstream: bool,
    pub generation: GenerationConfig,
}

impl ContainerConfig {
    pub fn from_env(mock_upstream: bool) -> Self {
        Self::from_lookup(mock_upstream, |name| std::env::var(name).ok())
    }

    /// Builds the config from `lookup` (variable name to value). An empty
    /// key counts as absent. The mock upstream never checks the key, so it
    /// gets a placeholder when unset.
    pub fn from_lookup(mock_upstream: bool, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .or_else(|| mock_upstream.then(|| "mock".to_string()));
        Self {
            api_key,
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            mock_upstream,
            generation: GenerationConfig::default(),
        }
    }
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let chat_client: Arc<dyn ChatClient> = if config.mock_upstream {
            debug!("Using mock upstream chat client");
            Arc::new(MockChatClient::new())
        } else {
            let gemini = GeminiClient::new(config.model.clone(), config.base_url.clone());
            debug!("Using Gemini model {} at {}", gemini.model(), gemini.url());
            Arc::new(gemini)
        };

        if config.api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; generate requests will fail until it is configured");
        }

        Self::with_chat_client(config, chat_client)
    }

    /// Wire an explicit upstream client, bypassing `mock_upstream`.
    pub fn with_chat_client(config: ContainerConfig, chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            chat_client,
            config,
        }
    }

    pub fn generate_reply_use_case(&self) -> GenerateReplyUseCase {
        GenerateReplyUseCase::new(self.chat_client.clone(), self.config.api_key.clone())
            .with_generation(self.config.generation.clone())
    }

    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    pub fn mock_upstream(&self) -> bool {
        self.config.mock_upstream
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn reads_model_and_base_url_with_defaults() {
        let config = ContainerConfig::from_lookup(false, lookup(&[("GEMINI_API_KEY", "k")]));
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        let config = ContainerConfig::from_lookup(
            false,
            lookup(&[
                ("GEMINI_MODEL", "gemini-pro"),
                ("GEMINI_BASE_URL", "http://localhost:9000"),
            ]),
        );
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn blank_key_is_absent_unless_mocked() {
        let config = ContainerConfig::from_lookup(false, lookup(&[("GEMINI_API_KEY", "  ")]));
        assert!(config.api_key.is_none());

        let config = ContainerConfig::from_lookup(true, lookup(&[]));
        assert_eq!(config.api_key.as_deref(), Some("mock"));
    }
}
