//! Health check routes

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Captures the process start time so the handler can report uptime.
pub struct HealthState {
    started_at: DateTime<Utc>,
}

impl HealthState {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
        }
    }
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub started_at: String,
    pub uptime_seconds: i64,
}

/// Create health routes
pub fn health_routes(state: Arc<HealthState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    let uptime = (Utc::now() - state.started_at).num_seconds().max(0);
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at.to_rfc3339(),
        uptime_seconds: uptime,
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            started_at: "2026-01-01T00:00:00+00:00".to_string(),
            uptime_seconds: 12,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("uptime_seconds"));
    }

    #[test]
    fn test_router_builds() {
        let _router = health_routes(Arc::new(HealthState::new()));
    }
}
