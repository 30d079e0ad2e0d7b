//! # bahari-storage
//!
//! Local filesystem image store for room photos. Uploads are decoded with
//! the `image` crate before being written, so the store never serves bytes
//! that are not a real image.

pub mod local;

pub use local::LocalImageStore;
