//! Sandbox HTTP routes
//!
//! `POST /execute` runs a submission through the sandbox pipeline.
//! Validation failures (empty submission, statement cap, guard rejection)
//! map to 400; engine errors during execution are carried inside a 200
//! report, matching what the editor frontend renders.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use crate::observability::{log_event, Event, Logger};
use crate::sandbox::{ExecutionReport, SandboxError, SandboxExecutor};

use super::ErrorResponse;

/// Sandbox state shared across handlers
pub struct SandboxState {
    pub executor: Arc<SandboxExecutor>,
}

impl SandboxState {
    pub fn new() -> Self {
        Self {
            executor: Arc::new(SandboxExecutor::new()),
        }
    }
}

impl Default for SandboxState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    #[serde(default)]
    pub query: String,
}

/// Create sandbox routes
pub fn sandbox_routes(state: Arc<SandboxState>) -> Router {
    Router::new()
        .route("/execute", post(execute_handler))
        .with_state(state)
}

async fn execute_handler(
    State(state): State<Arc<SandboxState>>,
    Json(request): Json<ExecuteRequest>,
) -> Result<Json<ExecutionReport>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4().to_string();
    log_event(
        Event::QueryReceived,
        &[
            ("request_id", &request_id),
            ("bytes", &request.query.len().to_string()),
        ],
    );

    // rusqlite is synchronous; keep it off the async workers
    let executor = state.executor.clone();
    let query = request.query;
    let result = tokio::task::spawn_blocking(move || executor.execute(&query))
        .await
        .map_err(|e| {
            internal_error(
                &request_id,
                SandboxError::Internal(format!("execution task failed: {}", e)),
            )
        })?;

    match result {
        Ok(report) => {
            log_event(
                Event::QueryExecuted,
                &[
                    ("request_id", &request_id),
                    ("statements", &report.total_statements.to_string()),
                    ("stopped", &report.stopped.to_string()),
                ],
            );
            Ok(Json(report))
        }
        Err(e) => {
            log_event(
                Event::QueryRejected,
                &[("request_id", &request_id), ("code", e.code())],
            );
            Err(reject(e))
        }
    }
}

fn reject(e: SandboxError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

fn internal_error(request_id: &str, e: SandboxError) -> (StatusCode, Json<ErrorResponse>) {
    Logger::error(
        Event::QueryRejected.as_str(),
        &[("request_id", request_id), ("code", e.code())],
    );
    reject(e)
}
