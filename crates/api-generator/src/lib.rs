//! # API Generator
//!
//! Draft generator service: turns a title and notes into a markdown document.
//!
//! Handles:
//! - `POST /mcp` with method `generateMarkdown`
//! - `GET /health` and the OpenAPI document
//!
//! Uses `api-shared` for the envelope and `drafts-core` for the markdown itself.

#![warn(rust_2018_idioms)]

use api_shared::methods::GENERATE_MARKDOWN;
use api_shared::{
    ErrorCode, GenerateMarkdownParams, HealthRes, HealthService, RpcError, RpcRequest,
    RpcResponse,
};
use axum::{
    body::Bytes,
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use drafts_core::MarkdownService;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

/// Application state for the generator service
#[derive(Clone)]
pub struct AppState {
    markdown_service: MarkdownService,
    health_service: HealthService,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            markdown_service: MarkdownService::new(),
            health_service: HealthService::new("Draft generator"),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(mcp, health),
    components(schemas(
        RpcRequest,
        RpcResponse,
        RpcError,
        GenerateMarkdownParams,
        HealthRes
    ))
)]
pub struct ApiDoc;

/// Builds the generator service router.
pub fn app() -> Router {
    Router::new()
        .route("/mcp", post(mcp))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(CorsLayer::permissive())
        .with_state(AppState::default())
}

/// Dispatches a decoded request to its handler.
pub fn dispatch(state: &AppState, req: &RpcRequest) -> RpcResponse {
    match req.method.as_str() {
        GENERATE_MARKDOWN => generate_markdown(&state.markdown_service, req),
        other => {
            tracing::warn!("Method not found: {:?}", other);
            RpcResponse::from_code(req.id, ErrorCode::MethodNotFound)
        }
    }
}

fn generate_markdown(markdown_service: &MarkdownService, req: &RpcRequest) -> RpcResponse {
    let params: GenerateMarkdownParams = match req.params_as() {
        Ok(params) => params,
        Err(e) => {
            tracing::warn!("Invalid generateMarkdown params: {}", e);
            return RpcResponse::from_code(req.id, ErrorCode::InvalidParams);
        }
    };

    let markdown = markdown_service.generate(&params.title, &params.notes);
    tracing::debug!("Generated markdown for id {}", req.id);
    RpcResponse::success(req.id, markdown)
}

#[utoipa::path(
    post,
    path = "/mcp",
    request_body = RpcRequest,
    responses(
        (status = 200, description = "JSON-RPC response; failures are reported in `error`", body = RpcResponse)
    )
)]
/// JSON-RPC endpoint for the generator service
///
/// The body is decoded by hand rather than through the `Json` extractor so that malformed
/// bodies produce a `Parse error` envelope instead of an HTTP 4xx.
#[axum::debug_handler]
async fn mcp(State(state): State<AppState>, body: Bytes) -> Json<RpcResponse> {
    let response = match RpcRequest::from_slice(&body) {
        Ok(req) => dispatch(&state, &req),
        Err(parse_error) => parse_error,
    };
    Json(response)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the generator service
#[axum::debug_handler]
async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(state.health_service.check_health())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_mcp(body: impl Into<Body>) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/mcp")
                    .header("content-type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_generate_markdown() {
        let (status, body) = post_mcp(
            json!({
                "method": "generateMarkdown",
                "params": {"title": "Hello World", "notes": "Some notes here."},
                "id": 1
            })
            .to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"result": "# Hello World\n\nSome notes here.", "id": 1})
        );
    }

    #[tokio::test]
    async fn test_generate_markdown_is_byte_exact() {
        let title = "  spaced \"quoted\" ";
        let notes = "line one\n\n  line two  \n";
        let (_, body) = post_mcp(
            json!({
                "method": "generateMarkdown",
                "params": {"title": title, "notes": notes},
                "id": 42
            })
            .to_string(),
        )
        .await;

        assert_eq!(body["result"], format!("# {}\n\n{}", title, notes));
        assert_eq!(body["id"], 42);
    }

    #[tokio::test]
    async fn test_generate_markdown_missing_params_degrades_to_empty() {
        let (_, body) = post_mcp(r#"{"method":"generateMarkdown","id":2}"#).await;
        assert_eq!(body, json!({"result": "# \n\n", "id": 2}));
    }

    #[tokio::test]
    async fn test_generate_markdown_wrong_params_shape() {
        let (_, body) =
            post_mcp(r#"{"method":"generateMarkdown","params":{"title":["x"]},"id":3}"#).await;
        assert_eq!(
            body,
            json!({"error": {"code": -32602, "message": "Invalid params"}, "id": 3})
        );
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let (status, body) = post_mcp(r#"{"method":"summarise","params":{},"id":7}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"error": {"code": -32601, "message": "Method not found"}, "id": 7})
        );
    }

    #[tokio::test]
    async fn test_null_method_is_method_not_found() {
        let (_, body) = post_mcp(r#"{"method":null,"id":4}"#).await;
        assert_eq!(
            body,
            json!({"error": {"code": -32601, "message": "Method not found"}, "id": 4})
        );
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (status, body) = post_mcp("this is not json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"error": {"code": -32700, "message": "Parse error"}, "id": 0})
        );
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"ok": true, "message": "Draft generator is alive"}));
    }

    #[tokio::test]
    async fn test_openapi_document_lists_mcp() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["paths"]["/mcp"]["post"].is_object());
    }

    #[test]
    fn test_dispatch_without_http() {
        let req = RpcRequest {
            method: GENERATE_MARKDOWN.into(),
            params: json!({"title": "T", "notes": "N"}),
            id: 9,
        };
        let resp = dispatch(&AppState::default(), &req);
        assert_eq!(resp, RpcResponse::success(9, "# T\n\nN"));
    }
}
