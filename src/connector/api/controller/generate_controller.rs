use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::domain::{DomainError, Transcript, Turn};

use super::super::Container;

pub const INVALID_MESSAGES: &str = "Invalid or empty messages array";
pub const MISSING_API_KEY: &str = "API key is not configured";
pub const GENERATION_FAILED: &str = "Failed to generate content";

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Maps a [`DomainError`] onto the proxy's status codes and fixed error texts.
/// Error details stay in the logs.
pub struct ApiError(pub DomainError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            DomainError::InvalidInput(_) => (StatusCode::BAD_REQUEST, INVALID_MESSAGES),
            DomainError::Misconfigured(_) => (StatusCode::INTERNAL_SERVER_ERROR, MISSING_API_KEY),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED),
        };
        (
            status,
            Json(ErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

/// Extracts the transcript from a `{ "messages": [...] }` body.
///
/// Missing, non-array, empty or malformed `messages` are all invalid input,
/// as is a body that is not JSON at all.
pub fn parse_transcript(body: &[u8]) -> Result<Transcript, DomainError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| DomainError::invalid_input(format!("body is not JSON: {e}")))?;

    let messages = match value.get("messages") {
        Some(Value::Array(messages)) if !messages.is_empty() => messages.clone(),
        Some(Value::Array(_)) => return Err(DomainError::invalid_input("messages is empty")),
        Some(_) => return Err(DomainError::invalid_input("messages is not an array")),
        None => return Err(DomainError::invalid_input("messages is missing")),
    };

    let turns: Vec<Turn> = serde_json::from_value(Value::Array(messages))
        .map_err(|e| DomainError::invalid_input(format!("malformed message: {e}")))?;

    Ok(turns.into())
}

/// `POST /api/generate`
pub async fn generate(
    State(container): State<Arc<Container>>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, ApiError> {
    let transcript = parse_transcript(&body).inspect_err(|e| debug!("Rejecting request: {e}"))?;

    let response = container
        .generate_reply_use_case()
        .execute(&transcript)
        .await?;

    Ok(Json(GenerateResponse { response }))
}
