//! Blob store trait for room images.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for the room image blob store.
///
/// Accepts image bytes and returns the public URL under which the image is
/// served. Implemented by the local filesystem provider in `bahari-storage`.
#[async_trait]
pub trait ImageStore: Send + Sync + std::fmt::Debug + 'static {
    /// Store an image and return its public URL.
    async fn store(&self, filename: &str, data: Bytes) -> AppResult<String>;

    /// Delete a previously stored image by its public URL.
    ///
    /// Unknown URLs are ignored so that room deletion never fails on a
    /// missing image.
    async fn delete(&self, public_url: &str) -> AppResult<()>;
}
