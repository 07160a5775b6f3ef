//! HTTP analysis service.
//!
//! Exposes the analyzer over a small axum router:
//!
//! - `POST /api/analyze` accepts `{ "code": "<verilog text>" }` and returns
//!   the analysis report with a success flag.
//! - `GET /health` is a liveness probe.
//!
//! The handler is a thin asynchronous pass-through: analysis itself is pure
//! and synchronous, and no behavior depends on timing. Non-string payloads
//! are rejected with a client error before the analyzer runs; the analyzer
//! call is additionally guarded so that an internal panic surfaces as a
//! generic server error (with detail only in dev mode) rather than a
//! connection drop.

#![warn(missing_docs)]

use std::net::SocketAddr;
use std::panic::{catch_unwind, AssertUnwindSafe};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};

use veriscan_analyzer::AnalysisReport;
use veriscan_config::ServerConfig;

/// Shared state for request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Whether internal failure details are exposed in responses.
    pub dev: bool,
}

/// A successful analysis response.
#[derive(Serialize)]
struct AnalyzeResponse {
    success: bool,
    #[serde(flatten)]
    report: AnalysisReport,
}

/// An error response carrying a caller-facing message.
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

/// Builds the service router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any))
        .with_state(state)
}

/// Runs the service on the configured address until the process exits.
pub async fn serve(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = config.addr.parse()?;
    let state = AppState { dev: config.dev };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, dev = config.dev, "analysis service listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}

async fn health_handler() -> &'static str {
    "ok"
}

/// Analyzes the submitted source text.
///
/// The body is accepted as arbitrary JSON so that a missing or non-string
/// `code` field can be answered with a structured 400 instead of axum's
/// default rejection.
async fn analyze_handler(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let Some(code) = body.get("code").and_then(Value::as_str) else {
        tracing::debug!("rejected analyze request without string 'code' field");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("expected a string 'code' field")),
        )
            .into_response();
    };

    let started = std::time::Instant::now();
    match catch_unwind(AssertUnwindSafe(|| veriscan_analyzer::analyze(code))) {
        Ok(report) => {
            tracing::info!(
                bytes = code.len(),
                errors = report.errors.len(),
                warnings = report.warnings.len(),
                elapsed_us = started.elapsed().as_micros() as u64,
                "analyzed source"
            );
            (
                StatusCode::OK,
                Json(AnalyzeResponse {
                    success: true,
                    report,
                }),
            )
                .into_response()
        }
        Err(panic) => {
            tracing::error!("analyzer panicked");
            let message = if state.dev {
                format!("analysis failed: {}", panic_message(panic.as_ref()))
            } else {
                "analysis failed".to_string()
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(message)),
            )
                .into_response()
        }
    }
}

/// Best-effort extraction of a panic payload message.
fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
