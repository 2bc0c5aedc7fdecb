//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_images_handler,
    list_links_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /images`      - List available icon images
/// - `GET    /links`       - List all links
/// - `POST   /links`       - Create a link
/// - `GET    /links/{id}`  - Fetch a link
/// - `PUT    /links/{id}`  - Partially update a link
/// - `DELETE /links/{id}`  - Delete a link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/images", get(list_images_handler))
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{id}",
            get(get_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
}
