//! Agentic HR payroll assistant.
//!
//! This crate relays chat messages to an OpenAI-compatible model and lets
//! the model answer them by calling six read-only lookups over the employee,
//! attendance and payroll records supplied with each request.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod lookup;
pub mod models;
pub mod relay;
pub mod tools;

#[cfg(test)]
mod fixtures;
