//! HTTP request handlers for the HR assistant API.
//!
//! This module contains the handler functions for all endpoints and the
//! router that wires them together with CORS, tracing and the frontend.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::Context;

use super::request::ChatRequest;
use super::response::{ApiError, ApiErrorResponse, HealthResponse};
use super::state::AppState;

/// Body returned for frontend paths when no bundle has been built.
const BUILD_FRONTEND_MESSAGE: &str = "Build frontend first: npm run build";

/// Creates the router with all endpoints.
///
/// `/assets` is only mounted if `<dist>/assets` exists when the router is
/// built. Every other unmatched path falls through to the frontend, except
/// under `/api`, which answers 404.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/health", get(health_handler));

    let assets = state.dist_dir().join("assets");
    if assets.is_dir() {
        router = router.nest_service("/assets", ServeDir::new(assets));
    }

    router
        .fallback(fallback_handler)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Maps a body extraction failure onto a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response()
}

/// Handler for `POST /api/chat`.
///
/// Answers with `{response, toolCalls}`. Provider trouble never changes the
/// status: it shows up in the response text.
async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        emp_id = %request.emp_id,
        "Processing chat request"
    );

    let context: Context = match request.context.unwrap_or_default().try_into() {
        Ok(context) => context,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid request context"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };
    if context.is_empty() {
        debug!(correlation_id = %correlation_id, "Chat request carries no records");
    }

    let start_time = Instant::now();
    let reply = state
        .relay()
        .chat(&request.message, &request.emp_id, &context)
        .await;

    info!(
        correlation_id = %correlation_id,
        emp_id = %request.emp_id,
        tool_calls = ?reply.tool_calls,
        duration_ms = start_time.elapsed().as_millis() as u64,
        "Chat request completed"
    );

    (StatusCode::OK, Json(reply)).into_response()
}

/// Handler for `GET /api/health`.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let relay = state.relay();
    Json(HealthResponse::healthy(
        relay.is_enabled(),
        relay.tools_available(),
    ))
}

/// Handler for every unmatched path.
///
/// API paths get a JSON 404; anything else gets the frontend's
/// `index.html` so client-side routes work on reload.
async fn fallback_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        return ApiErrorResponse::new(StatusCode::NOT_FOUND, ApiError::not_found()).into_response();
    }

    match tokio::fs::read(state.dist_dir().join("index.html")).await {
        Ok(index) => Html(index).into_response(),
        Err(_) => Json(json!({ "message": BUILD_FRONTEND_MESSAGE })).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LookupPolicy;
    use crate::llm::{ChatMessage, ChatModel, CompletionRequest, CompletionResponse, LlmError};
    use crate::relay::{ChatRelay, NOT_CONFIGURED_MESSAGE};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Echoes the user's message back.
    struct EchoModel;

    #[async_trait]
    impl ChatModel for EchoModel {
        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            let user = request.messages[1].text_or_empty().to_string();
            Ok(CompletionResponse::new(ChatMessage::assistant(format!(
                "You said: {}",
                user
            ))))
        }

        fn model(&self) -> &str {
            "echo"
        }
    }

    fn create_test_state(model: Option<Arc<dyn ChatModel>>, dist_dir: &str) -> AppState {
        AppState::new(
            ChatRelay::new(model, LookupPolicy::default(), 0.3),
            dist_dir,
        )
    }

    fn router(model: Option<Arc<dyn ChatModel>>) -> Router {
        create_router(create_test_state(model, "./no-such-dist"))
    }

    async fn body_json(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn post_chat(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_chat_returns_reply() {
        let response = router(Some(Arc::new(EchoModel)))
            .oneshot(post_chat(r#"{"message":"Hello","empId":"EMP001"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = body_json(response).await;
        assert_eq!(body["response"], "You said: Hello");
        assert_eq!(body["toolCalls"], json!([]));
    }

    #[tokio::test]
    async fn test_chat_without_provider_returns_advisory() {
        let response = router(None)
            .oneshot(post_chat(
                r#"{"message":"Hello","empId":"EMP001","context":{}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["response"], NOT_CONFIGURED_MESSAGE);
        assert_eq!(body["toolCalls"], json!([]));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let response = router(None)
            .oneshot(post_chat("{not valid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let response = router(None)
            .oneshot(post_chat(r#"{"message":"Hello"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("empId"));
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .body(Body::from(r#"{"message":"Hello","empId":"EMP001"}"#))
            .unwrap();
        let response = router(None).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_invalid_context_record_is_validation_error() {
        let body = json!({
            "message": "Hello",
            "empId": "EMP001",
            "context": {
                "employees": [{
                    "empId": "EMP001", "name": "Raj Kumar", "position": "Engineer",
                    "department": "Engineering", "salary": -5, "joinDate": "2022-01-15"
                }]
            }
        });
        let response = router(Some(Arc::new(EchoModel)))
            .oneshot(post_chat(body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("employees record at index 0, field 'salary'"));
    }

    #[tokio::test]
    async fn test_health_reports_provider_and_tools() {
        let response = router(None).oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "status": "healthy", "ai_enabled": false, "tools_available": 6 })
        );

        let response = router(Some(Arc::new(EchoModel)))
            .oneshot(get_request("/api/health"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["ai_enabled"], true);
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_not_found() {
        let response = router(None).oneshot(get_request("/api/nope")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "code": "NOT_FOUND", "message": "Not found" })
        );
    }

    #[tokio::test]
    async fn test_frontend_path_without_build() {
        let response = router(None).oneshot(get_request("/payroll")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Build frontend first: npm run build" })
        );
    }

    #[tokio::test]
    async fn test_frontend_served_from_dist() {
        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), "<html>app</html>").unwrap();
        std::fs::create_dir(dist.path().join("assets")).unwrap();
        std::fs::write(dist.path().join("assets").join("app.js"), "console.log(1)").unwrap();

        let state = create_test_state(None, dist.path().to_str().unwrap());
        let router = create_router(state);

        let response = router.clone().oneshot(get_request("/attendance")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"<html>app</html>");

        let response = router.oneshot(get_request("/assets/app.js")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"console.log(1)");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::builder()
            .uri("/api/health")
            .header("Origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = router(None).oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
    }
}
