use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::TurnGateway;
use crate::domain::{DomainError, Transcript, Turn};

/// Shown when the proxy answered non-2xx without an `error` field.
pub const GENERIC_HTTP_ERROR: &str = "An error occurred while fetching the response.";
/// Shown when the proxy could not be reached or answered garbage.
pub const GENERIC_NETWORK_ERROR: &str = "An unexpected error occurred. Please try again.";

/// Something that happened to a chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    InputChanged(String),
    Submitted(String),
    ReplyReceived(String),
    RequestFailed(String),
}

/// Client-side state of one chat session.
///
/// Updated only through [`ChatState::apply`], which returns a new state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    transcript: Transcript,
    input: String,
    pending: bool,
    error: Option<String>,
    /// Bumped on every transcript change; views scroll to the newest turn when
    /// it moves.
    revision: u64,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether submitting `text` would start a request.
    pub fn accepts(&self, text: &str) -> bool {
        !self.pending && !text.trim().is_empty()
    }

    pub fn apply(&self, event: ChatEvent) -> ChatState {
        match event {
            ChatEvent::InputChanged(input) => ChatState {
                input,
                ..self.clone()
            },
            ChatEvent::Submitted(text) => {
                if !self.accepts(&text) {
                    return self.clone();
                }
                ChatState {
                    transcript: self.transcript.append(Turn::user(text)),
                    input: self.input.clone(),
                    pending: true,
                    error: None,
                    revision: self.revision + 1,
                }
            }
            // Replies and failures only land on an in-flight request.
            ChatEvent::ReplyReceived(_) | ChatEvent::RequestFailed(_) if !self.pending => {
                self.clone()
            }
            ChatEvent::ReplyReceived(text) => ChatState {
                transcript: self.transcript.append(Turn::assistant(text)),
                input: String::new(),
                pending: false,
                error: None,
                revision: self.revision + 1,
            },
            // The optimistic user turn stays.
            ChatEvent::RequestFailed(message) => ChatState {
                transcript: self.transcript.clone(),
                input: String::new(),
                pending: false,
                error: Some(message),
                revision: self.revision,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank text, or a request is already in flight. Nothing changed.
    Ignored,
    Replied,
    Failed,
}

/// One browsing-session-equivalent conversation with the proxy.
pub struct ChatSession {
    id: String,
    gateway: Arc<dyn TurnGateway>,
    state: ChatState,
}

impl ChatSession {
    pub fn new(gateway: Arc<dyn TurnGateway>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            gateway,
            state: ChatState::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn transcript(&self) -> &Transcript {
        self.state.transcript()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.state = self.state.apply(ChatEvent::InputChanged(input.into()));
    }

    /// Submits the current input field.
    pub async fn submit_input(&mut self) -> SubmitOutcome {
        let text = self.state.input().to_string();
        self.submit(&text).await
    }

    /// Appends `text` as a user turn, sends the whole transcript to the proxy
    /// and records the reply or a user-visible error.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        if !self.state.accepts(text) {
            debug!(session = %self.id, "Ignoring submit: blank input or request pending");
            return SubmitOutcome::Ignored;
        }

        self.state = self.state.apply(ChatEvent::Submitted(text.to_string()));
        debug!(
            session = %self.id,
            "Sending transcript of {} turns",
            self.state.transcript().len()
        );

        match self.gateway.generate(self.state.transcript()).await {
            Ok(reply) => {
                self.state = self.state.apply(ChatEvent::ReplyReceived(reply));
                SubmitOutcome::Replied
            }
            Err(e) => {
                warn!(session = %self.id, "Turn failed: {e}");
                self.state = self
                    .state
                    .apply(ChatEvent::RequestFailed(Self::error_message(&e)));
                SubmitOutcome::Failed
            }
        }
    }

    /// User-visible text for a failed turn.
    pub fn error_message(error: &DomainError) -> String {
        match error {
            DomainError::Http {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            DomainError::Network(_) => GENERIC_NETWORK_ERROR.to_string(),
            _ => GENERIC_HTTP_ERROR.to_string(),
        }
    }
}
