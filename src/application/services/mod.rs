//! Business logic services for the application layer.

pub mod image_service;
pub mod link_service;

pub use image_service::ImageService;
pub use link_service::LinkService;
