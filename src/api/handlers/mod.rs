//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod images;
pub mod links;

pub use health::{health_handler, index_handler};
pub use images::{list_images_handler, serve_image_handler};
pub use links::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
    update_link_handler,
};
