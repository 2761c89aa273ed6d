//! # API Writer
//!
//! Draft writer service: writes Jekyll drafts with generated front matter.
//!
//! Handles:
//! - `POST /mcp` with method `writeJekyllDraft`
//! - `GET /health` and the OpenAPI document
//! - Mapping `drafts-core` errors onto JSON-RPC error codes
//!
//! Uses `api-shared` for the envelope and `drafts-core` for rendering and the file write.

#![warn(rust_2018_idioms)]

use std::sync::Arc;

use api_shared::methods::{WRITE_JEKYLL_DRAFT, WRITTEN_RESULT};
use api_shared::{
    ErrorCode, HealthRes, HealthService, RpcError, RpcRequest, RpcResponse,
    WriteJekyllDraftParams,
};
use axum::{
    body::Bytes,
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use drafts_core::{DraftError, DraftRecord, DraftService, NonEmptyText};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

/// Message returned when either required draft field is missing or empty.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and path are required";

/// Application state for the writer service
///
/// Holds the draft service used by every request. The service is immutable, so requests share
/// it without locking.
#[derive(Clone)]
pub struct AppState {
    draft_service: Arc<DraftService>,
    health_service: HealthService,
}

impl AppState {
    pub fn new(draft_service: DraftService) -> Self {
        Self {
            draft_service: Arc::new(draft_service),
            health_service: HealthService::new("Draft writer"),
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
        WriteJekyllDraftParams,
        HealthRes
    ))
)]
pub struct ApiDoc;

/// Builds the writer service router around `draft_service`.
pub fn app(draft_service: DraftService) -> Router {
    Router::new()
        .route("/mcp", post(mcp))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(draft_service))
}

/// Dispatches a decoded request to its handler.
pub async fn dispatch(state: &AppState, req: &RpcRequest) -> RpcResponse {
    match req.method.as_str() {
        WRITE_JEKYLL_DRAFT => write_jekyll_draft(state.draft_service.clone(), req).await,
        other => {
            tracing::warn!("Method not found: {:?}", other);
            RpcResponse::from_code(req.id, ErrorCode::MethodNotFound)
        }
    }
}

async fn write_jekyll_draft(draft_service: Arc<DraftService>, req: &RpcRequest) -> RpcResponse {
    let params: WriteJekyllDraftParams = match req.params_as() {
        Ok(params) => params,
        Err(e) => {
            tracing::warn!("Invalid writeJekyllDraft params: {}", e);
            return RpcResponse::from_code(req.id, ErrorCode::InvalidParams);
        }
    };

    let record = match draft_record(params) {
        Ok(record) => record,
        Err(e) => return RpcResponse::error(req.id, e),
    };

    match tokio::task::spawn_blocking(move || draft_service.write(&record)).await {
        Ok(Ok(_path)) => RpcResponse::success(req.id, WRITTEN_RESULT),
        Ok(Err(e)) => {
            tracing::error!("Write draft error: {:?}", e);
            RpcResponse::error(req.id, rpc_error(&e))
        }
        Err(e) => {
            tracing::error!("Write draft task failed: {}", e);
            RpcResponse::error(
                req.id,
                RpcError::new(ErrorCode::InternalError, format!("Failed to write file: {}", e)),
            )
        }
    }
}

/// Validates wire params into a `DraftRecord`.
///
/// # Errors
///
/// Returns an `InvalidParams` error if `title` or `path` is empty.
pub fn draft_record(params: WriteJekyllDraftParams) -> Result<DraftRecord, RpcError> {
    let (Ok(title), Ok(path)) = (NonEmptyText::new(params.title), NonEmptyText::new(params.path))
    else {
        return Err(RpcError::new(
            ErrorCode::InvalidParams,
            REQUIRED_FIELDS_MESSAGE,
        ));
    };

    Ok(DraftRecord {
        title,
        path,
        tags: params.tags,
        categories: params.categories,
        series: Some(params.series).filter(|s| !s.is_empty()),
        summary: Some(params.summary).filter(|s| !s.is_empty()),
        body: params.body,
    })
}

/// Maps a core error onto the wire. The error text, including any OS detail, is passed through.
pub fn rpc_error(error: &DraftError) -> RpcError {
    let code = if error.is_invalid_input() {
        ErrorCode::InvalidParams
    } else {
        ErrorCode::InternalError
    };
    RpcError::new(code, error.to_string())
}

#[utoipa::path(
    post,
    path = "/mcp",
    request_body = RpcRequest,
    responses(
        (status = 200, description = "JSON-RPC response; failures are reported in `error`", body = RpcResponse)
    )
)]
/// JSON-RPC endpoint for the writer service
///
/// Writes `<path>/_drafts/<sanitised-title>.md` and answers `"written"` on success.
///
/// # Errors
/// Reported in the response body, never as an HTTP status:
/// - `-32700` if the body is not a valid envelope (id is `0`)
/// - `-32601` if the method is not `writeJekyllDraft`
/// - `-32602` if params are malformed, `title`/`path` are missing, or the title has no usable
///   filename characters
/// - `-32603` if the drafts directory or file cannot be written
#[axum::debug_handler]
async fn mcp(State(state): State<AppState>, body: Bytes) -> Json<RpcResponse> {
    let response = match RpcRequest::from_slice(&body) {
        Ok(req) => dispatch(&state, &req).await,
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
/// Health check endpoint for the writer service
#[axum::debug_handler]
async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(state.health_service.check_health())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
