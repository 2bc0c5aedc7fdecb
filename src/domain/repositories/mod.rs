//! Repository trait definitions for the domain layer.
//!
//! This module defines the interfaces (traits) that abstract data access,
//! following the Repository pattern. These traits are implemented by
//! concrete types in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Link CRUD operations
//! - [`ImageStore`] - Icon image listing and retrieval
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod image_store;
pub mod link_repository;

pub use image_store::ImageStore;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use image_store::MockImageStore;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
