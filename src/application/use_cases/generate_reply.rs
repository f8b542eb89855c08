use std::sync::Arc;

use tracing::{debug, error};

use crate::application::ChatClient;
use crate::domain::{DomainError, GenerationConfig, Instruction, Transcript, UpstreamChat};

/// Proxy turn handler: maps a client transcript onto an upstream chat call.
///
/// Stateless per invocation. Conversational continuity exists only because the
/// client resends its whole transcript every turn.
pub struct GenerateReplyUseCase {
    chat_client: Arc<dyn ChatClient>,
    credential: Option<String>,
    instruction: Instruction,
    generation: GenerationConfig,
}

impl GenerateReplyUseCase {
    /// `credential` is the provider API key captured at process start.
    /// `None` makes every call fail with [`DomainError::Misconfigured`].
    pub fn new(chat_client: Arc<dyn ChatClient>, credential: Option<String>) -> Self {
        Self {
            chat_client,
            credential: credential.filter(|key| !key.trim().is_empty()),
            instruction: Instruction::default(),
            generation: GenerationConfig::default(),
        }
    }

    pub fn with_instruction(mut self, instruction: Instruction) -> Self {
        self.instruction = instruction;
        self
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Builds the upstream call for `transcript` without sending it.
    ///
    /// History is every turn but the last, in order; the outgoing message is
    /// the instruction followed by a blank line and the last turn's text.
    pub fn prepare(&self, transcript: &Transcript) -> Result<UpstreamChat, DomainError> {
        let (last, prior) = transcript
            .split_last()
            .ok_or_else(|| DomainError::invalid_input("transcript is empty"))?;

        Ok(UpstreamChat::new(
            UpstreamChat::history_from(prior),
            self.instruction.apply(last.text()),
            self.generation.clone(),
        ))
    }

    pub async fn execute(&self, transcript: &Transcript) -> Result<String, DomainError> {
        if transcript.is_empty() {
            return Err(DomainError::invalid_input("transcript is empty"));
        }

        let credential = self.credential.as_deref().ok_or_else(|| {
            error!("Upstream API key is not set");
            DomainError::misconfigured("upstream API key is not configured")
        })?;

        let chat = self.prepare(transcript)?;
        debug!(
            "Sending turn upstream ({} history entries, {} chars)",
            chat.history().len(),
            chat.message().len()
        );

        self.chat_client
            .send(credential, &chat)
            .await
            .map_err(|e| {
                error!("Error in chat generation: {e}");
                DomainError::upstream("failed to generate content")
            })
    }
}
