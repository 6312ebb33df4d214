//! HTTP API module for the HR assistant.
//!
//! This module provides the chat and health endpoints, the static frontend
//! and the catch-all for client-side routes.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ChatRequest, ContextPayload};
pub use response::{ApiError, ApiErrorResponse, HealthResponse};
pub use state::AppState;
