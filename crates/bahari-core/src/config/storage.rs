//! Room image storage configuration.

use serde::{Deserialize, Serialize};

/// Image blob store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for stored room images.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Public base URL under which stored images are served.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Maximum upload size in bytes (default 10 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Placeholder image URL used when a room has no image.
    #[serde(default = "default_placeholder")]
    pub placeholder_image_url: String,
}

fn default_data_root() -> String {
    "data/images".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:8080/images".to_string()
}

fn default_max_upload() -> u64 {
    10 * 1024 * 1024
}

fn default_placeholder() -> String {
    "/images/room-placeholder.jpg".to_string()
}
