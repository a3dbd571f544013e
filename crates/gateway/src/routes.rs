//! HTTP routes for the single-shot boundary.

use axum::extract::{Json, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tracing::info;

use orchestrator::ConversationId;

use crate::error::ApiError;
use crate::state::AppState;
use crate::wire::{MessageRequest, MessageResponse};
use crate::ws::ws_endpoint;

#[derive(Debug, Serialize)]
struct Health {
    status: String,
}

/// Build the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/messages", post(process_message))
        .route("/ws/:client_id", get(ws_endpoint))
        .with_state(state)
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

/// Single-shot dispatch. The bearer credential is resolved through the
/// security collaborator before the orchestrator is reached; dispatch
/// failures come back as HTTP 200 with the error body shape.
async fn process_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    authorize(&state, &headers).await?;

    info!(user = %request.user_id, "Processing message");

    // Single-shot calls get their own conversation identity.
    let conversation = ConversationId::new();
    let outcome = state
        .orchestrator
        .dispatch(
            &request.message,
            &request.user_id,
            request.context,
            &conversation,
        )
        .await;

    Ok(Json(MessageResponse::from_outcome(&outcome)))
}

async fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(security) = state.security.as_ref() else {
        return Ok(());
    };

    let Some(value) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Err(ApiError::Unauthorized);
    };

    let Ok(value) = value.to_str() else {
        return Err(ApiError::Unauthorized);
    };

    let token = value.strip_prefix("Bearer ").unwrap_or(value);
    if security.authenticate_token(token).await.is_none() {
        return Err(ApiError::Unauthorized);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use mock_provider::{AllowListSecurity, EchoProvider, FailingProvider};
    use orchestrator::Orchestrator;

    async fn app(security: Option<Arc<AllowListSecurity>>) -> Router {
        let orchestrator = Arc::new(Orchestrator::new());
        orchestrator
            .register_provider("mock", Arc::new(EchoProvider::named("mock")))
            .await;
        let security = security.map(|s| s as Arc<dyn provider_core::Security>);
        router(AppState::new(orchestrator, security))
    }

    fn post_message(token: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/api/messages")
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(None).await;
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_process_message_success() {
        let security = AllowListSecurity::default().with_token("secret-token", "alice");
        let app = app(Some(Arc::new(security))).await;

        let response = app
            .oneshot(post_message(
                Some("secret-token"),
                r#"{"message": "Hello", "user_id": "alice"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert_eq!(value["content"], "Processed by mock: Hello");
        assert_eq!(value["provider"], "mock");
        assert!(value.get("conversation_id").is_some());
        assert!(value.get("timestamp").is_some());
        assert!(value.get("error").is_none());
    }

    #[tokio::test]
    async fn test_missing_token_is_401() {
        let security = AllowListSecurity::default().with_token("secret-token", "alice");
        let app = app(Some(Arc::new(security))).await;

        let response = app
            .oneshot(post_message(None, r#"{"message": "Hello", "user_id": "alice"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_token_is_401() {
        let security = AllowListSecurity::default().with_token("secret-token", "alice");
        let app = app(Some(Arc::new(security))).await;

        let response = app
            .oneshot(post_message(
                Some("forged"),
                r#"{"message": "Hello", "user_id": "alice"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_no_security_runs_open() {
        let app = app(None).await;
        let response = app
            .oneshot(post_message(None, r#"{"message": "Hello", "user_id": "anyone"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_200_with_error_body() {
        let orchestrator = Arc::new(Orchestrator::new());
        orchestrator
            .register_provider("broken", Arc::new(FailingProvider::new("backend down")))
            .await;
        let app = router(AppState::new(orchestrator, None));

        let response = app
            .oneshot(post_message(None, r#"{"message": "Hello", "user_id": "u"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert_eq!(value["content"], "");
        assert!(value["error"]
            .as_str()
            .unwrap()
            .contains("backend down"));
    }
}
