//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ImageService, LinkService};
use crate::domain::repositories::{ImageStore, LinkRepository};

/// Handles to the services behind the HTTP layer.
///
/// Built once by [`crate::server::run`] from an explicitly opened pool and
/// cloned per request; clones share the same services.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub image_service: Arc<ImageService>,
}

impl AppState {
    /// Creates state from any repository and image store implementation.
    pub fn new(links: Arc<dyn LinkRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(links)),
            image_service: Arc::new(ImageService::new(images)),
        }
    }
}
