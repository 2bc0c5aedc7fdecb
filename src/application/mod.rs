//! Application layer services implementing business logic.
//!
//! This layer enforces the domain rules and coordinates repository calls.
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link CRUD with invariant checks
//! - [`services::image_service::ImageService`] - Icon listing and safe retrieval

pub mod services;
