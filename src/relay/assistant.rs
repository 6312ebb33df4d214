//! The two-round-trip chat turn.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{LookupPolicy, Settings};
use crate::llm::{ChatMessage, ChatModel, CompletionRequest, LlmError, ToolDefinition};
use crate::models::Context;
use crate::tools::{execute_tool, tool_catalog};

use super::prompt::system_prompt;
use super::reply::ChatReply;

/// Relays a user's message to the model, executing the model's tool calls
/// against the request context in between.
///
/// A turn is at most two provider round trips:
///
/// 1. the conversation plus the tool catalog, with `tool_choice: "auto"`
/// 2. only if the model asked for tools: the conversation extended with the
///    model's calls and their results, without tools
///
/// The relay holds no per-request state and is shared across requests.
pub struct ChatRelay {
    model: Option<Arc<dyn ChatModel>>,
    tools: Vec<ToolDefinition>,
    policy: LookupPolicy,
    temperature: f32,
}

impl ChatRelay {
    /// Creates a relay.
    ///
    /// # Arguments
    ///
    /// * `model` - The provider client, or `None` to answer every message
    ///   with the "not configured" advisory
    /// * `policy` - Lookup rules, also used to describe the tools
    /// * `temperature` - Sampling temperature for both round trips
    pub fn new(model: Option<Arc<dyn ChatModel>>, policy: LookupPolicy, temperature: f32) -> Self {
        Self {
            model,
            tools: tool_catalog(&policy),
            policy,
            temperature,
        }
    }

    /// Creates a relay from loaded settings.
    pub fn from_settings(model: Option<Arc<dyn ChatModel>>, settings: &Settings) -> Self {
        Self::new(
            model,
            settings.policy.clone(),
            settings.provider.temperature,
        )
    }

    /// Returns true if a provider client is configured.
    pub fn is_enabled(&self) -> bool {
        self.model.is_some()
    }

    /// Returns the number of tools offered to the model.
    pub fn tools_available(&self) -> usize {
        self.tools.len()
    }

    /// Returns the lookup rules tool calls run under.
    pub fn policy(&self) -> &LookupPolicy {
        &self.policy
    }

    /// Answers one chat message.
    ///
    /// Never fails: a missing provider yields the "not configured" advisory
    /// and a provider failure at any point yields an `❌ Error:` reply with
    /// no tool names.
    pub async fn chat(&self, message: &str, emp_id: &str, context: &Context) -> ChatReply {
        let Some(model) = self.model.as_deref() else {
            debug!(emp_id, "Chat requested without a configured provider");
            return ChatReply::not_configured();
        };

        match self.run(model, message, emp_id, context).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(emp_id, error = %error, "Chat turn failed");
                ChatReply::failure(&error)
            }
        }
    }

    async fn run(
        &self,
        model: &dyn ChatModel,
        message: &str,
        emp_id: &str,
        context: &Context,
    ) -> Result<ChatReply, LlmError> {
        let mut messages = vec![
            ChatMessage::system(system_prompt(emp_id)),
            ChatMessage::user(message),
        ];

        let request = CompletionRequest::new(messages.clone(), self.temperature)
            .with_tools(self.tools.clone());
        let decision = model.complete(request).await?;

        if decision.tool_calls().is_empty() {
            debug!(emp_id, "Model answered without tools");
            return Ok(ChatReply::new(decision.text(), Vec::new()));
        }

        let mut results = Vec::with_capacity(decision.tool_calls().len());
        let mut tool_names = Vec::with_capacity(decision.tool_calls().len());
        for call in decision.tool_calls() {
            let result = execute_tool(
                &call.function.name,
                &call.function.arguments,
                context,
                &self.policy,
            );
            debug!(emp_id, tool = %call.function.name, call_id = %call.id, "Executed tool call");

            results.push(ChatMessage::tool_result(&call.id, result.to_string()));
            tool_names.push(call.function.name.clone());
        }

        messages.push(decision.message);
        messages.extend(results);

        let answer = model
            .complete(CompletionRequest::new(messages, self.temperature))
            .await?;

        info!(emp_id, tool_calls = ?tool_names, "Chat turn completed with tools");
        Ok(ChatReply::new(answer.text(), tool_names))
    }
}

impl fmt::Debug for ChatRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatRelay")
            .field("model", &self.model.as_ref().map(|m| m.model().to_string()))
            .field("tools", &self.tools.len())
            .field("policy", &self.policy)
            .field("temperature", &self.temperature)
            .finish()
    }
}
