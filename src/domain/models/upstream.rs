use serde::{Deserialize, Serialize};

use super::Turn;

/// One text part of an upstream message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// A role-tagged history entry in the upstream provider's vocabulary
/// (`"user"` / `"model"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamMessage {
    pub role: String,
    pub parts: Vec<Part>,
}

impl UpstreamMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// First (and in practice only) text part.
    pub fn text(&self) -> &str {
        self.parts.first().map(|p| p.text.as_str()).unwrap_or("")
    }
}

impl From<&Turn> for UpstreamMessage {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.speaker().upstream_role().to_string(),
            parts: vec![Part {
                text: turn.text().to_string(),
            }],
        }
    }
}

/// Output bounds and sampling settings sent with every upstream call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 8000,
            temperature: 1.0,
            top_p: 0.95,
            top_k: 64,
            response_mime_type: "text/plain".to_string(),
        }
    }
}

/// A single upstream chat call: seeded history plus the message to send.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamChat {
    history: Vec<UpstreamMessage>,
    message: String,
    generation: GenerationConfig,
}

impl UpstreamChat {
    pub fn new(history: Vec<UpstreamMessage>, message: String, generation: GenerationConfig) -> Self {
        Self {
            history,
            message,
            generation,
        }
    }

    /// Maps `prior` turns to history, order preserved.
    pub fn history_from(prior: &[Turn]) -> Vec<UpstreamMessage> {
        prior.iter().map(UpstreamMessage::from).collect()
    }

    pub fn history(&self) -> &[UpstreamMessage] {
        &self.history
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn generation(&self) -> &GenerationConfig {
        &self.generation
    }

    /// History followed by the outgoing message as a final user entry.
    pub fn contents(&self) -> Vec<UpstreamMessage> {
        let mut contents = self.history.clone();
        contents.push(UpstreamMessage::user(self.message.clone()));
        contents
    }
}
