//! Stay package management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bahari_core::error::AppError;
use bahari_core::result::AppResult;
use bahari_database::repositories::package::PackageRepository;
use bahari_entity::package::model::{CreatePackage, Package, UpdatePackage};

/// Handles package CRUD.
#[derive(Debug, Clone)]
pub struct PackageService {
    package_repo: Arc<PackageRepository>,
}

impl PackageService {
    /// Creates a new package service.
    pub fn new(package_repo: Arc<PackageRepository>) -> Self {
        Self { package_repo }
    }

    /// All packages.
    pub async fn list(&self) -> AppResult<Vec<Package>> {
        self.package_repo.find_all().await
    }

    /// A single package.
    pub async fn get(&self, id: Uuid) -> AppResult<Package> {
        self.package_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Package {id} not found")))
    }

    /// Create a package.
    pub async fn create(&self, data: CreatePackage) -> AppResult<Package> {
        if data.price_addon < 0 {
            return Err(AppError::validation(
                "Package add-on price cannot be negative",
            ));
        }

        let package = self.package_repo.create(&data).await?;
        info!(package_id = %package.id, name = %package.name, "Package created");
        Ok(package)
    }

    /// Apply a partial update to a package.
    pub async fn update(&self, id: Uuid, data: UpdatePackage) -> AppResult<Package> {
        if matches!(data.price_addon, Some(p) if p < 0) {
            return Err(AppError::validation(
                "Package add-on price cannot be negative",
            ));
        }

        let package = self.package_repo.update(id, &data).await?;
        info!(package_id = %id, "Package updated");
        Ok(package)
    }

    /// Delete a package. Existing bookings keep their agreed totals.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.package_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Package {id} not found")));
        }
        info!(package_id = %id, "Package deleted");
        Ok(())
    }
}
