//! Chat orchestration between the user, the model and the tools.
//!
//! [`ChatRelay`] runs one chat turn: it asks the model for a decision,
//! executes any tool calls against the request context, and asks the model
//! again for the final answer. Every outcome, including a missing provider
//! or a provider failure, is a [`ChatReply`].

mod assistant;
mod prompt;
mod reply;

pub use assistant::ChatRelay;
pub use prompt::system_prompt;
pub use reply::{ChatReply, NOT_CONFIGURED_MESSAGE};
