//! Handlers for link management endpoints (list, create, read, update, delete).

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkResponse, UpdateLinkRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// ```json
/// [{ "id": 1, "name": "Docs", "url": "https://example.com", "icon": null }]
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.get_all().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Creates a link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Docs",
///   "url": "https://example.com",
///   "icon": "docs.png"   // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or `name`/`url` is missing
/// or empty.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let (Some(name), Some(url)) = (payload.name, payload.url) else {
        return Err(AppError::bad_request("name and url are required"));
    };

    let link = state.link_service.create(name, url, payload.icon).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Returns a single link.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has the id.
pub async fn get_link_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let Path(id) = id?;
    let link = state.link_service.get_by_id(id).await?;

    Ok(Json(link.into()))
}

/// Partially updates a link.
///
/// # Endpoint
///
/// `PUT /api/links/{id}`
///
/// # Request Body
///
/// Any subset of the fields; only provided fields are changed.
///
/// ```json
/// {
///   "name": "New name",
///   "icon": null          // clears the icon
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is missing, empty, or blanks a required field.
/// Returns 404 Not Found if no link has the id.
pub async fn update_link_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateLinkRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let link = state.link_service.update(id, payload.into()).await?;

    Ok(Json(link.into()))
}

/// Permanently deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// Responds with 204 No Content and an empty body.
///
/// # Errors
///
/// Returns 404 Not Found if no link has the id, including a link that was
/// already deleted.
pub async fn delete_link_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.link_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
