//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and file storage.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL pool management and repository implementations
//! - [`storage`] - Local filesystem image store

pub mod persistence;
pub mod storage;
