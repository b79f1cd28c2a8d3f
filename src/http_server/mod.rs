//! HTTP server module
//!
//! The axum API consumed by the browser frontend.
//!
//! # Endpoints
//!
//! - `GET /health` (also `GET /api/health`) - liveness
//! - `GET /api/lessons` - lesson summaries
//! - `GET /api/lessons/{id}` - full lesson content
//! - `POST /api/execute` - run a SQL submission in the sandbox
//! - `/*` - static frontend files when `static_dir` is configured

use serde::Serialize;

pub mod config;
pub mod health_routes;
pub mod lesson_routes;
pub mod sandbox_routes;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use server::HttpServer;

/// Error body shared by all routes
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
