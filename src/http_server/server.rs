//! HTTP server
//!
//! Combines the lesson, sandbox, and health routers into the single axum
//! app the frontend talks to. API routes live under `/api`; unmatched
//! routes fall back to the static frontend directory when one is
//! configured.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::observability::{log_event, Event};

use super::config::HttpServerConfig;
use super::health_routes::{health_routes, HealthState};
use super::lesson_routes::{lesson_routes, LessonState};
use super::sandbox_routes::{sandbox_routes, SandboxState};

/// HTTP server for the dojo frontend
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig) -> Router {
        let lesson_state = Arc::new(LessonState::new());
        let sandbox_state = Arc::new(SandboxState::new());
        let health_state = Arc::new(HealthState::new());

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let api = Router::new()
            .merge(lesson_routes(lesson_state))
            .merge(sandbox_routes(sandbox_state))
            .merge(health_routes(health_state.clone()));

        let mut router = Router::new()
            // Health check at root level as well as under /api
            .merge(health_routes(health_state))
            .nest("/api", api);

        // Unmatched routes serve the frontend when a directory is configured
        if let Some(static_dir) = &config.static_dir {
            router = router.fallback_service(ServeDir::new(static_dir));
        }

        router.layer(cors).layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let listener = TcpListener::bind(addr).await?;
        log_event(
            Event::ServerListening,
            &[("addr", &addr.to_string())],
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_static_dir() {
        let config = HttpServerConfig {
            static_dir: Some(std::path::PathBuf::from("./frontend")),
            ..Default::default()
        };
        let _router = HttpServer::with_config(config).router();
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::with_config(config).router();
    }
}
