//! Add-on package domain.

pub mod model;

pub use model::{CreatePackage, Package, UpdatePackage};
