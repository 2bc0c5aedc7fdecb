//! Store trait for the icon image directory.

use crate::domain::entities::ImageFile;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to a directory of image files.
///
/// Files are placed in the directory out of band; the store never writes
/// images, it only lists and opens them.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::FsImageStore`] - local filesystem
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Lists the image filenames directly inside the directory, sorted.
    ///
    /// A missing directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the directory cannot be read.
    async fn list(&self) -> Result<Vec<String>, AppError>;

    /// Opens an image by filename.
    ///
    /// The caller is responsible for rejecting names that could escape the
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such image file exists.
    /// Returns [`AppError::Internal`] on other I/O errors.
    async fn open(&self, filename: &str) -> Result<ImageFile, AppError>;

    /// Creates the directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the directory cannot be created.
    async fn ensure_dir(&self) -> Result<(), AppError>;

    /// Returns true if the directory exists and is readable.
    async fn is_available(&self) -> bool;
}
