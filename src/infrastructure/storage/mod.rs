//! Filesystem-backed storage for icon images.
//!
//! - [`FsImageStore`] - Lists and opens images from a local directory

pub mod fs_image_store;

pub use fs_image_store::FsImageStore;
