use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{DomainError, UpstreamChat, SOCRATIC_INSTRUCTION};

/// In-process stand-in for the upstream model.
///
/// Answers every call with a fixed reply, or echoes the prompt (the message
/// minus the Socratic instruction prefix) when none is set. Records each call
/// so tests can check what would have been sent.
pub struct MockChatClient {
    reply: Option<String>,
    failure: Option<String>,
    calls: Mutex<Vec<(String, UpstreamChat)>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            reply: None,
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            ..Self::new()
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<UpstreamChat> {
        self.lock().iter().map(|(_, chat)| chat.clone()).collect()
    }

    pub fn credentials(&self) -> Vec<String> {
        self.lock().iter().map(|(key, _)| key.clone()).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, UpstreamChat)>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn send(&self, credential: &str, chat: &UpstreamChat) -> Result<String, DomainError> {
        self.lock().push((credential.to_string(), chat.clone()));
        debug!("MockChatClient: call #{}", self.lock().len());

        if let Some(message) = &self.failure {
            return Err(DomainError::upstream(message.clone()));
        }

        Ok(match &self.reply {
            Some(reply) => reply.clone(),
            None => {
                let prompt = chat
                    .message()
                    .strip_prefix(SOCRATIC_INSTRUCTION)
                    .and_then(|rest| rest.strip_prefix("\n\n"))
                    .unwrap_or(chat.message());
                format!("What makes you ask about \"{prompt}\"?")
            }
        })
    }
}
