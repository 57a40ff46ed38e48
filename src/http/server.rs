//! HTTP server bootstrap
//!
//! Builds the combined router (books + health), applies CORS and
//! serves on the configured address.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::catalog::BookStore;
use crate::observability::Logger;

use super::config::ServerConfig;
use super::routes::{book_routes, health_routes, AppState};

/// HTTP server for the book catalog
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store with custom configuration
    pub fn with_config(config: ServerConfig, store: Arc<dyn BookStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Create a server over the given store with default configuration
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self::with_config(ServerConfig::default(), store)
    }

    fn build_router(config: &ServerConfig, store: Arc<dyn BookStore>) -> Router {
        let state = Arc::new(AppState::new(store));

        // With credentials allowed, tower-http rejects wildcard values,
        // so "every origin" is expressed by mirroring the request
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        };

        Router::new()
            .merge(health_routes())
            .merge(book_routes(state))
            .layer(cors)
    }

    /// Socket address string the server will bind to
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Router (for tests)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info(
            "HTTP_SERVER_STARTED",
            &[("addr", &addr.to_string()), ("health", "/health")],
        );

        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;

    fn test_store() -> Arc<dyn BookStore> {
        Arc::new(MemoryCatalog::new())
    }

    #[test]
    fn test_server_default_addr() {
        let server = HttpServer::new(test_store());
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::with_config(ServerConfig::with_port(8080), test_store());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let server = HttpServer::with_config(config, test_store());
        let _router = server.router();
    }
}
