//! The outcome of a chat turn.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Reply text when no model provider is configured.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "⚠️ AI not configured. Please set GROQ_API_KEY environment variable.";

/// The assistant's answer and the tools it used to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Text shown to the user.
    pub response: String,
    /// Names of the tools executed, in execution order.
    #[serde(rename = "toolCalls")]
    pub tool_calls: Vec<String>,
}

impl ChatReply {
    /// Creates a reply.
    pub fn new(response: impl Into<String>, tool_calls: Vec<String>) -> Self {
        Self {
            response: response.into(),
            tool_calls,
        }
    }

    /// The advisory returned while no model provider is configured.
    pub fn not_configured() -> Self {
        Self::new(NOT_CONFIGURED_MESSAGE, Vec::new())
    }

    /// The reply for a turn that failed talking to the provider.
    pub fn failure(error: &impl Display) -> Self {
        Self::new(format!("❌ Error: {}", error), Vec::new())
    }
}
