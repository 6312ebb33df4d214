//! OpenAI-compatible chat completions client.
//!
//! Works against any provider exposing `POST {base_url}/chat/completions`
//! with bearer authentication and function calling; the default
//! configuration points at Groq.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ProviderSettings;

use super::client::{ChatModel, LlmError};
use super::types::{ChatMessage, CompletionRequest, CompletionResponse, ToolDefinition};

/// Path appended to the base URL.
const COMPLETIONS_PATH: &str = "/chat/completions";

/// Tool selection mode sent whenever tools are offered.
const TOOL_CHOICE_AUTO: &str = "auto";

/// Request body of a chat completion.
#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    #[serde(skip_serializing_if = "no_tools")]
    tools: &'a [ToolDefinition],
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<&'static str>,
}

fn no_tools(tools: &&[ToolDefinition]) -> bool {
    tools.is_empty()
}

/// The part of a chat completion response the assistant uses.
#[derive(Debug, Deserialize)]
struct CompletionEnvelope {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Chat model client for OpenAI-compatible providers.
pub struct OpenAiCompatibleClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiCompatibleClient {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer credential
    /// * `settings` - Base URL, model and request timeout
    ///
    /// # Returns
    ///
    /// The client, or [`LlmError::Network`] if the HTTP client could not
    /// be built.
    pub fn new(api_key: impl Into<String>, settings: &ProviderSettings) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(settings.timeout()).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        })
    }

    /// Returns the full completions endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, COMPLETIONS_PATH)
    }

    fn build_body<'a>(&'a self, request: &'a CompletionRequest) -> CompletionBody<'a> {
        CompletionBody {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
            tools: &request.tools,
            tool_choice: (!request.tools.is_empty()).then_some(TOOL_CHOICE_AUTO),
        }
    }

    fn parse_response(body: &str) -> Result<CompletionResponse, LlmError> {
        let envelope: CompletionEnvelope = serde_json::from_str(body)?;

        envelope
            .choices
            .into_iter()
            .next()
            .map(|choice| CompletionResponse::new(choice.message))
            .ok_or_else(|| LlmError::InvalidResponse("response contained no choices".to_string()))
    }
}

#[async_trait]
impl ChatModel for OpenAiCompatibleClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&self.build_body(&request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Self::parse_response(&body)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

impl fmt::Debug for OpenAiCompatibleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiCompatibleClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}
