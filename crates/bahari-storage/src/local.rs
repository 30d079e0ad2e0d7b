//! Local filesystem image store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use bahari_core::config::StorageConfig;
use bahari_core::error::{AppError, ErrorKind};
use bahari_core::result::AppResult;
use bahari_core::traits::ImageStore;

/// Image store backed by a local directory served as static files.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    /// Root directory for stored images.
    root: PathBuf,
    /// Public base URL under which `root` is served.
    public_base_url: String,
    /// Maximum accepted upload size in bytes.
    max_upload_size_bytes: u64,
}

impl LocalImageStore {
    /// Create a new store rooted at the configured directory.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let root = PathBuf::from(&config.data_root);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Internal,
                format!("Failed to create image root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
            max_upload_size_bytes: config.max_upload_size_bytes,
        })
    }

    /// Root directory the store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate the upload and derive the stored file name.
    ///
    /// The bytes must decode as a real image; the stored name is a fresh
    /// UUID with an extension matching the detected format, so client
    /// file names never reach the filesystem.
    fn stored_name(data: &[u8], original_name: &str) -> AppResult<String> {
        let format = image::guess_format(data).map_err(|e| {
            AppError::validation(format!("Unrecognized image format for '{original_name}': {e}"))
        })?;

        image::load_from_memory_with_format(data, format).map_err(|e| {
            AppError::validation(format!("Invalid image data for '{original_name}': {e}"))
        })?;

        let ext = match format {
            image::ImageFormat::Png => "png",
            image::ImageFormat::Jpeg => "jpg",
            image::ImageFormat::Gif => "gif",
            image::ImageFormat::WebP => "webp",
            _ => {
                return Err(AppError::validation(format!(
                    "Unsupported image format for '{original_name}'; use PNG, JPEG, GIF or WebP"
                )));
            }
        };

        Ok(format!("{}.{ext}", Uuid::new_v4()))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store(&self, filename: &str, data: Bytes) -> AppResult<String> {
        if data.is_empty() {
            return Err(AppError::validation("Empty image upload"));
        }
        if data.len() as u64 > self.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "Image exceeds the maximum upload size of {} bytes",
                self.max_upload_size_bytes
            )));
        }

        let original_name = filename.to_string();
        let decode_input = data.clone();
        let stored = tokio::task::spawn_blocking(move || {
            Self::stored_name(&decode_input, &original_name)
        })
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Image decode task panicked", e))??;

        let full_path = self.root.join(&stored);
        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Internal,
                format!("Failed to write image: {}", full_path.display()),
                e,
            )
        })?;

        debug!(file = %stored, bytes = data.len(), "Stored room image");
        Ok(format!("{}/{stored}", self.public_base_url))
    }

    async fn delete(&self, public_url: &str) -> AppResult<()> {
        let Some(name) = public_url.rsplit('/').next() else {
            return Ok(());
        };
        // Reject anything that could escape the root.
        if name.is_empty() || name.contains("..") || name.contains(std::path::MAIN_SEPARATOR) {
            return Ok(());
        }

        let full_path = self.root.join(name);
        match fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(file = name, "Deleted room image");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Internal,
                format!("Failed to delete image: {}", full_path.display()),
                e,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Bytes {
        // 1x1 white pixel encoded via the image crate.
        let img = image::RgbImage::from_pixel(1, 1, image::Rgb([255, 255, 255]));
        let mut out = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        Bytes::from(out.into_inner())
    }

    async fn store_in(dir: &tempfile::TempDir) -> LocalImageStore {
        let config = StorageConfig {
            data_root: dir.path().to_str().unwrap().to_string(),
            public_base_url: "http://localhost:8080/images".to_string(),
            max_upload_size_bytes: 1024 * 1024,
            placeholder_image_url: "/images/room-placeholder.jpg".to_string(),
        };
        LocalImageStore::new(&config).await.unwrap()
    }

    #[tokio::test]
    async fn test_store_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir).await;

        let url = store.store("room.png", tiny_png()).await.unwrap();
        assert!(url.starts_with("http://localhost:8080/images/"));
        assert!(url.ends_with(".png"));

        let name = url.rsplit('/').next().unwrap();
        assert!(dir.path().join(name).exists());

        store.delete(&url).await.unwrap();
        assert!(!dir.path().join(name).exists());
    }

    #[tokio::test]
    async fn test_non_image_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir).await;

        let err = store
            .store("evil.png", Bytes::from_static(b"<html>not an image</html>"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_delete_unknown_url_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir).await;
        store
            .delete("http://localhost:8080/images/missing.png")
            .await
            .unwrap();
    }
}
