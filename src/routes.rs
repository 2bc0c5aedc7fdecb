//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                   - Liveness string
//! - `GET  /health`             - Health check: database and image directory
//! - `GET  /images/{filename}`  - Raw icon image
//! - `/api/*`                   - JSON API (links and image listing)
//!
//! # Middleware
//!
//! - **CORS** - Any origin, method and header
//! - **Tracing** - Structured request/response logging
//! - **Trailing slash** - `/api/links/` is routed as `/api/links`

use crate::api;
use crate::api::handlers::{health_handler, index_handler, serve_image_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Path normalization wraps the router so it runs before route matching;
/// serve the result with `axum::ServiceExt::into_make_service`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/images/{filename}", get(serve_image_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
