//! Handlers for icon image endpoints.

use axum::{
    Json,
    body::Body,
    extract::{Path, State, rejection::PathRejection},
    http::header,
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;

use crate::error::AppError;
use crate::state::AppState;

/// Lists the image filenames available as icons.
///
/// # Endpoint
///
/// `GET /api/images`
///
/// Returns an empty array when the image directory does not exist.
pub async fn list_images_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.image_service.list_images().await?))
}

/// Streams a single image file.
///
/// # Endpoint
///
/// `GET /images/{filename}`
///
/// # Errors
///
/// Returns 400 Bad Request if the filename is not valid UTF-8 or tries to
/// leave the image directory.
/// Returns 404 Not Found if the image does not exist.
pub async fn serve_image_handler(
    filename: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(filename) = filename?;
    let image = state.image_service.open_image(&filename).await?;

    let body = Body::from_stream(ReaderStream::new(image.file));

    Ok((
        [
            (header::CONTENT_TYPE, image.content_type.to_string()),
            (header::CONTENT_LENGTH, image.len.to_string()),
        ],
        body,
    )
        .into_response())
}
