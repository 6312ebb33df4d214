//! Core chat model trait and error type.

use async_trait::async_trait;
use thiserror::Error;

use super::types::{CompletionRequest, CompletionResponse};

/// A chat completion backend.
///
/// Each call is independent; the caller carries the whole conversation in
/// every request.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Sends one completion request and waits for the reply.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Identifier of the model answering requests.
    fn model(&self) -> &str;
}

/// Errors that can occur while talking to the model provider.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The provider answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as sent by the provider.
        message: String,
    },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response was well-formed JSON but not a usable completion.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The response body was not the expected JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
