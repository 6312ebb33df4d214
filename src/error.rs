//! Error types for the HR assistant.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that stop a request or the process from starting:
//! configuration problems and invalid request context. Provider failures
//! live in [`crate::llm::LlmError`] and lookup misses in
//! [`crate::lookup::LookupError`], since neither ever reaches the caller as
//! an error.

use thiserror::Error;

/// The main error type for the HR assistant.
///
/// # Example
///
/// ```
/// use hr_assistant::error::AssistantError;
///
/// let error = AssistantError::ConfigNotFound {
///     path: "/missing/assistant.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/assistant.yaml");
/// ```
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A setting was present but could not be interpreted.
    #[error("Invalid setting '{name}': {message}")]
    InvalidSetting {
        /// The name of the setting (environment variable or YAML key).
        name: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A record in the request context was invalid.
    #[error("Invalid {collection} record at index {index}, field '{field}': {message}")]
    InvalidRecord {
        /// The context sequence holding the record.
        collection: &'static str,
        /// Position of the record in its sequence.
        index: usize,
        /// The field that was invalid.
        field: &'static str,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return AssistantError.
pub type AssistantResult<T> = Result<T, AssistantError>;
