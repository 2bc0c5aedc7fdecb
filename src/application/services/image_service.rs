//! Icon image listing and retrieval service.

use std::sync::Arc;

use crate::domain::entities::ImageFile;
use crate::domain::repositories::ImageStore;
use crate::error::AppError;

/// Service exposing the image directory as a browsable set of files.
///
/// Filenames coming from clients are checked here so that no store
/// implementation ever sees a name that could resolve outside its directory.
pub struct ImageService {
    store: Arc<dyn ImageStore>,
}

impl ImageService {
    /// Creates a new image service.
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self { store }
    }

    /// Lists recognized image filenames, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the directory exists but cannot be read.
    pub async fn list_images(&self) -> Result<Vec<String>, AppError> {
        self.store.list().await
    }

    /// Opens an image for streaming.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the filename could escape the directory.
    /// Returns [`AppError::NotFound`] if the image does not exist.
    pub async fn open_image(&self, filename: &str) -> Result<ImageFile, AppError> {
        validate_filename(filename)?;
        self.store.open(filename).await
    }

    /// Creates the image directory when it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the directory cannot be created.
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        self.store.ensure_dir().await
    }

    /// Returns true if the image directory is present.
    pub async fn is_available(&self) -> bool {
        self.store.is_available().await
    }
}

/// Rejects names that are not a single plain path component.
fn validate_filename(filename: &str) -> Result<(), AppError> {
    let invalid = filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(['/', '\\', '\0'])
        || std::path::Path::new(filename).is_absolute();

    if invalid {
        tracing::warn!(filename, "Rejected image filename");
        return Err(AppError::bad_request("Invalid image filename"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockImageStore;

    #[test]
    fn test_validate_filename_accepts_plain_names() {
        assert!(validate_filename("logo.png").is_ok());
        assert!(validate_filename("my icon.jpeg").is_ok());
    }

    #[test]
    fn test_validate_filename_rejects_traversal() {
        for name in [
            "",
            ".",
            "..",
            "../secret.png",
            "..\\secret.png",
            "sub/logo.png",
            "/etc/passwd",
            "C:\\Windows\\logo.png",
            "logo\0.png",
        ] {
            assert!(
                matches!(validate_filename(name), Err(AppError::Validation(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_open_image_never_reaches_store_for_bad_name() {
        let mut store = MockImageStore::new();
        store.expect_open().times(0);

        let service = ImageService::new(Arc::new(store));
        let result = service.open_image("../Cargo.toml").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_images_passes_through() {
        let mut store = MockImageStore::new();
        store
            .expect_list()
            .times(1)
            .returning(|| Ok(vec!["a.png".to_string(), "c.JPG".to_string()]));

        let service = ImageService::new(Arc::new(store));

        assert_eq!(service.list_images().await.unwrap(), vec!["a.png", "c.JPG"]);
    }
}
