//! Axum route handlers for the portfolio backend.
//!
//! # Routes
//!
//! - `GET  /health`       — Liveness probe with completion API status
//! - `POST /api/chatbot`  — Ask the assistant a question
//! - `POST /api/chat`     — Alias of `/api/chatbot`
//! - `POST /api/contact`  — Validate and acknowledge a contact form submission

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::chat::{LocalMatcher, RemoteCompletionClient, ResponseDispatcher};
use crate::config::ServerConfig;
use crate::llms::error::CompletionError;
use crate::llms::providers::OpenAICompletion;

use super::validation::{ChatRequest, ContactSubmission, FieldError};

/// Sent when answering a chat message failed outright.
pub const LAST_RESORT_ANSWER: &str =
    "I'm having trouble processing your message. Please try again with a simpler question.";

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<ResponseDispatcher>,
}

impl AppState {
    pub fn new(dispatcher: ResponseDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Wire the built-in keyword table and the OpenAI provider.
    pub fn from_config(config: &ServerConfig) -> Result<Self, CompletionError> {
        let provider = OpenAICompletion::new(
            config.openai_api_key.clone(),
            Some(config.openai_base_url.clone()),
            config.openai_timeout,
        )?;
        let remote = RemoteCompletionClient::new(Arc::new(provider));
        Ok(Self::new(ResponseDispatcher::new(LocalMatcher::default(), remote)))
    }
}

/// JSON body of every `/api/*` response.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ApiResponse {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
        }
    }

    fn failed(message: impl Into<String>, errors: Option<Vec<FieldError>>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors,
        }
    }
}

type ApiReply = (StatusCode, Json<ApiResponse>);

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chatbot", post(chatbot_handler))
        .route("/api/chat", post(chat_handler))
        .route(
            "/api/contact",
            post(contact_handler).layer(CatchPanicLayer::custom(contact_failure)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health — liveness probe.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "portfolio-assistant",
        "completion_available": state.dispatcher.remote().availability().is_available(),
    }))
}

/// Turn a body extraction result into validated input or a 400 reply.
fn validated<T>(
    payload: Result<Json<Value>, JsonRejection>,
    parse: fn(&Value) -> Result<T, Vec<FieldError>>,
    invalid_message: &str,
) -> Result<T, ApiReply> {
    let errors = match payload {
        Ok(Json(body)) => match parse(&body) {
            Ok(parsed) => return Ok(parsed),
            Err(errors) => errors,
        },
        Err(rejection) => vec![FieldError::malformed_body(rejection.body_text())],
    };

    Err((
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::failed(invalid_message, Some(errors))),
    ))
}

/// POST /api/chatbot — answer a visitor question.
async fn chatbot_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiReply {
    answer_chat(state, payload, "Invalid chatbot message").await
}

/// POST /api/chat — alias of `/api/chatbot`.
async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiReply {
    answer_chat(state, payload, "Invalid chat message").await
}

/// Shared chat pipeline.
///
/// Anything past validation answers 200. The dispatcher runs in its own task
/// so that even a panic inside it still produces a reply.
async fn answer_chat(
    state: AppState,
    payload: Result<Json<Value>, JsonRejection>,
    invalid_message: &str,
) -> ApiReply {
    let request = match validated(payload, ChatRequest::parse, invalid_message) {
        Ok(request) => request,
        Err(reply) => {
            tracing::debug!("rejected chat request");
            return reply;
        }
    };

    tracing::info!(message = %request.message, "chat received message");

    let dispatcher = state.dispatcher.clone();
    let question = request.message;
    let reply = match tokio::spawn(async move { dispatcher.respond(&question).await }).await {
        Ok(reply) => reply,
        Err(join_error) => {
            tracing::error!(error = %join_error, "chat dispatch failed");
            LAST_RESORT_ANSWER.to_string()
        }
    };

    (StatusCode::OK, Json(ApiResponse::ok(reply)))
}

/// POST /api/contact — validate and acknowledge a contact form submission.
///
/// Submissions are only logged; nothing is stored or mailed.
async fn contact_handler(payload: Result<Json<Value>, JsonRejection>) -> ApiReply {
    let submission = match validated(payload, ContactSubmission::parse, "Invalid form data") {
        Ok(submission) => submission,
        Err(reply) => return reply,
    };

    let id = Uuid::new_v4();
    let received_at = chrono::Utc::now();
    tracing::info!(
        %id,
        %received_at,
        name = %submission.name,
        email = %submission.email,
        message = %submission.message,
        "contact form submission"
    );

    (
        StatusCode::OK,
        Json(ApiResponse::ok("Message received successfully")),
    )
}

/// 500 reply for a contact submission whose processing panicked.
fn contact_failure(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(%detail, "contact form processing failed");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failed(
            "Failed to process contact form submission",
            None,
        )),
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::remote::UNAVAILABLE_ANSWER;
    use crate::llms::base_llm::{BaseLLM, CompletionRequest};
    use crate::llms::stub::{Scripted, StubLLM};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn state_with(backend: Arc<dyn BaseLLM>) -> AppState {
        AppState::new(ResponseDispatcher::new(
            LocalMatcher::default(),
            RemoteCompletionClient::new(backend),
        ))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn greeting() -> String {
        LocalMatcher::default().table().rules()[0].answer().to_string()
    }

    #[derive(Debug)]
    struct PanickingLLM;

    #[async_trait]
    impl BaseLLM for PanickingLLM {
        async fn acall(&self, _request: &CompletionRequest) -> Result<String, CompletionError> {
            panic!("backend exploded");
        }
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = app_router(state_with(Arc::new(StubLLM::text("x"))));
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::VERSION);
        assert_eq!(json["completion_available"], true);
    }

    #[tokio::test]
    async fn test_chatbot_hello_returns_greeting() {
        let stub = Arc::new(StubLLM::text("remote"));
        let app = app_router(state_with(stub.clone()));

        let (status, json) = send(app, post_json("/api/chatbot", r#"{"message":"hello"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], greeting());
        assert!(json.get("errors").is_none());
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_chat_alias_behaves_the_same() {
        let app = app_router(state_with(Arc::new(StubLLM::text("remote"))));
        let (status, json) = send(app, post_json("/api/chat", r#"{"message":"hello"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], greeting());
    }

    #[tokio::test]
    async fn test_chatbot_missing_message_is_400() {
        let app = app_router(state_with(Arc::new(StubLLM::text("remote"))));
        let (status, json) = send(app, post_json("/api/chatbot", "{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid chatbot message");
        assert_eq!(json["errors"][0]["path"][0], "message");
    }

    #[tokio::test]
    async fn test_chat_empty_message_is_400() {
        let app = app_router(state_with(Arc::new(StubLLM::text("remote"))));
        let (status, json) = send(app, post_json("/api/chat", r#"{"message":""}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid chat message");
        assert_eq!(json["errors"][0]["code"], "too_small");
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let app = app_router(state_with(Arc::new(StubLLM::text("remote"))));
        let (status, json) = send(app, post_json("/api/chatbot", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_unmatched_question_uses_remote_answer() {
        let stub = Arc::new(StubLLM::text("He enjoys long walks."));
        let app = app_router(state_with(stub.clone()));

        let (status, json) =
            send(app, post_json("/api/chatbot", r#"{"message":"zzz nonsense"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "He enjoys long walks.");
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_quota_error_flips_health_and_skips_remote() {
        let stub = Arc::new(StubLLM::new(Scripted::RateLimited));
        let state = state_with(stub.clone());

        let (status, _) = send(
            app_router(state.clone()),
            post_json("/api/chatbot", r#"{"message":"zzz nonsense"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, json) = send(
            app_router(state.clone()),
            post_json("/api/chatbot", r#"{"message":"zzz other"}"#),
        )
        .await;
        assert_eq!(json["message"], UNAVAILABLE_ANSWER);
        assert_eq!(stub.calls(), 1);

        let health = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (_, json) = send(app_router(state), health).await;
        assert_eq!(json["completion_available"], false);
    }

    #[tokio::test]
    async fn test_dispatch_panic_still_answers_200() {
        let app = app_router(state_with(Arc::new(PanickingLLM)));
        let (status, json) =
            send(app, post_json("/api/chatbot", r#"{"message":"zzz nonsense"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], LAST_RESORT_ANSWER);
    }

    #[tokio::test]
    async fn test_contact_valid_submission() {
        let app = app_router(state_with(Arc::new(StubLLM::text("x"))));
        let body = r#"{"name":"Ada","email":"ada@example.com","message":"Please build me a site."}"#;
        let (status, json) = send(app, post_json("/api/contact", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Message received successfully");
    }

    #[tokio::test]
    async fn test_contact_short_message_is_400() {
        let app = app_router(state_with(Arc::new(StubLLM::text("x"))));
        let body = r#"{"name":"Al","email":"a@b.com","message":"short"}"#;
        let (status, json) = send(app, post_json("/api/contact", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid form data");

        let errors = json["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["path"][0], "message");
    }

    #[tokio::test]
    async fn test_contact_without_json_content_type_is_400() {
        let app = app_router(state_with(Arc::new(StubLLM::text("x"))));
        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .body(Body::from("name=Ada"))
            .unwrap();
        let (status, json) = send(app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }

    async fn exploding_contact() -> ApiReply {
        panic!("mail relay exploded");
    }

    #[tokio::test]
    async fn test_contact_processing_failure_is_500() {
        let app: Router = Router::new().route(
            "/api/contact",
            post(exploding_contact).layer(CatchPanicLayer::custom(contact_failure)),
        );
        let body = r#"{"name":"Ada","email":"ada@example.com","message":"Please build me a site."}"#;
        let (status, json) = send(app, post_json("/api/contact", body)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Failed to process contact form submission");
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_from_config_without_key_starts() {
        let state = AppState::from_config(&ServerConfig::default()).unwrap();
        assert!(state.dispatcher.remote().availability().is_available());
    }
}
