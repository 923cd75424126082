//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    fetch_handler, generate_comment_handler, generate_photo_handler, health_handler,
    improve_handler, publish_handler, search_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub server_deps: Arc<ServerDeps>,
}

/// Router options that come from configuration
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
    pub max_body_bytes: usize,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Build the Axum application router
pub fn build_app(server_deps: ServerDeps, options: AppOptions) -> Router {
    let app_state = AxumAppState {
        server_deps: Arc::new(server_deps),
    };

    let allow_origin = if options.allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = options
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/generate/comment", post(generate_comment_handler))
        .route("/api/generate/photo", post(generate_photo_handler))
        .route("/api/generate/improve", post(improve_handler))
        .route("/api/wordpress/publish", post(publish_handler))
        .route("/api/wordpress/search", post(search_handler))
        .route("/api/wordpress/fetch", post(fetch_handler))
        .layer(DefaultBodyLimit::max(options.max_body_bytes))
        .layer(Extension(app_state)) // Add shared state
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
