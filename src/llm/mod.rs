//! Model provider layer.
//!
//! This module provides:
//! - message and tool types of the OpenAI-compatible chat completions API
//! - the [`ChatModel`] trait the relay talks to
//! - [`OpenAiCompatibleClient`], the reqwest implementation

mod client;
mod openai;
mod types;

pub use client::{ChatModel, LlmError};
pub use openai::OpenAiCompatibleClient;
pub use types::{
    ChatMessage, CompletionRequest, CompletionResponse, FunctionCall, FunctionDefinition, Role,
    ToolCall, ToolDefinition,
};
