//! HTTP audit server.
//!
//! Exposes the integrity auditor as a JSON API so RAG pipelines can score
//! retrieved context before generation without shelling out to the CLI.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/audit` | Audit a (query, chunks) pair; returns audit, answer, duplicate flags |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "query must not be empty" } }
//! ```
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted to support browser-based
//! dashboards calling the audit endpoint directly.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::answer;
use crate::auditor::IntegrityAuditor;
use crate::config::Config;
use crate::models::{AuditResult, GroundedAnswer};
use crate::text;

/// Shared application state passed to route handlers. The auditor holds
/// only fixed weight constants, so one instance serves all requests.
#[derive(Clone)]
struct AppState {
    auditor: Arc<IntegrityAuditor>,
}

/// Starts the audit server on the address configured in `[server].bind`.
/// Runs until the process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();

    let state = AppState {
        auditor: Arc::new(IntegrityAuditor::new()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/audit", post(handle_audit))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state);

    println!("Audit server listening on http://{}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable error code (e.g., `"bad_request"`).
    code: String,
    /// Human-readable error message.
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

/// Constructs a 400 Bad Request error.
fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    /// Always `"ok"` when the server is running.
    status: String,
    /// The crate version from `Cargo.toml`.
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ POST /audit ============

/// JSON request body for `POST /audit`.
#[derive(Deserialize)]
struct AuditRequest {
    query: String,
    #[serde(default)]
    chunks: Vec<String>,
}

/// JSON response body for `POST /audit`: the full audit, the gated
/// grounded answer, and per-chunk near-duplicate flags for display.
#[derive(Serialize)]
struct AuditResponse {
    audit: AuditResult,
    answer: GroundedAnswer,
    duplicate_flags: Vec<bool>,
}

/// Handler for `POST /audit`.
///
/// Normalizes the inputs, audits them, and generates the grounded answer
/// from the audit's own relevance output. Inputs that normalize to nothing
/// are client errors rather than degenerate zero-score audits, so callers
/// notice broken pipelines immediately.
async fn handle_audit(
    State(state): State<AppState>,
    Json(request): Json<AuditRequest>,
) -> Result<Json<AuditResponse>, AppError> {
    let (query, chunks) = text::normalize_inputs(&request.query, &request.chunks);

    if query.is_empty() {
        return Err(bad_request("query must not be empty"));
    }
    if chunks.is_empty() {
        return Err(bad_request("chunks must not be empty"));
    }

    let audit = state.auditor.audit(&query, &chunks);
    let answer =
        answer::generate_grounded_answer(&query, &chunks, &audit.relevance_scores, audit.score);
    let duplicate_flags = state.auditor.duplicate_flags(&chunks);

    Ok(Json(AuditResponse {
        audit,
        answer,
        duplicate_flags,
    }))
}
