//! Local filesystem implementation of the image store.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

use crate::domain::entities::{ImageFile, content_type_for, is_image_filename};
use crate::domain::repositories::ImageStore;
use crate::error::AppError;

/// Image store rooted at a single directory.
///
/// Only regular files directly inside `base_dir` are visible; subdirectories
/// are never traversed.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    base_dir: PathBuf,
}

impl FsImageStore {
    /// Creates a store for the given directory. The directory need not exist.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn list(&self) -> Result<Vec<String>, AppError> {
        let mut entries = match fs::read_dir(&self.base_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(dir = %self.base_dir.display(), "Image directory does not exist");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !is_image_filename(&name) {
                continue;
            }

            // Follows symlinks, so a link to a regular file is listed.
            match fs::metadata(entry.path()).await {
                Ok(meta) if meta.is_file() => names.push(name),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, file = %name, "Skipping unreadable image entry");
                }
            }
        }

        names.sort();
        Ok(names)
    }

    async fn open(&self, filename: &str) -> Result<ImageFile, AppError> {
        let content_type = content_type_for(filename)
            .ok_or_else(|| AppError::not_found(format!("Image '{filename}' not found")))?;

        let path = self.base_dir.join(filename);
        let meta = match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => meta,
            Ok(_) => return Err(AppError::not_found(format!("Image '{filename}' not found"))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::not_found(format!("Image '{filename}' not found")));
            }
            Err(e) => return Err(e.into()),
        };

        let file = fs::File::open(&path).await?;

        Ok(ImageFile {
            content_type,
            len: meta.len(),
            file,
        })
    }

    async fn ensure_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.base_dir).await?;
        Ok(())
    }

    async fn is_available(&self) -> bool {
        fs::metadata(&self.base_dir)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }
}
