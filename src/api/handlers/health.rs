//! Handlers for liveness and health check endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Plain-text liveness message returned by `GET /`.
pub const LIVENESS_MESSAGE: &str = "Link directory backend is running!";

/// Returns a fixed liveness string.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> &'static str {
    LIVENESS_MESSAGE
}

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 12 links" },
///     "images": { "status": "ok", "message": "Image directory available" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let images_check = check_images(&state).await;

    let all_healthy = db_check.is_ok() && images_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            images: images_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity by counting links.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.link_service.count().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {count} links")),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unavailable");
            CheckStatus::error("Database unavailable")
        }
    }
}

/// Checks that the image directory exists.
async fn check_images(state: &AppState) -> CheckStatus {
    if state.image_service.is_available().await {
        CheckStatus::ok("Image directory available")
    } else {
        CheckStatus::error("Image directory missing")
    }
}
