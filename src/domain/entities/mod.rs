//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without infrastructure concerns.
//!
//! # Entity Types
//!
//! - [`Link`] - A named URL stored in the directory
//! - [`ImageFile`] - An opened icon image from the image directory
//!
//! # Design Pattern
//!
//! Links follow the "New Type" pattern with separate structs per operation:
//! - `NewLink` - For creating new records
//! - `LinkPatch` - For partial updates

pub mod image;
pub mod link;

pub use image::{ImageFile, content_type_for, is_image_filename};
pub use link::{ICON_MAX_LEN, Link, LinkPatch, NAME_MAX_LEN, NewLink, URL_MAX_LEN};
