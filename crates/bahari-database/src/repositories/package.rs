//! Package repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use bahari_core::error::{AppError, ErrorKind};
use bahari_core::result::AppResult;
use bahari_entity::package::model::{CreatePackage, Package, UpdatePackage};

/// Repository for stay-package CRUD operations.
#[derive(Debug, Clone)]
pub struct PackageRepository {
    pool: PgPool,
}

impl PackageRepository {
    /// Create a new package repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a package by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Package>> {
        sqlx::query_as::<_, Package>("SELECT * FROM packages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find package by id", e)
            })
    }

    /// List all packages, cheapest add-on first.
    pub async fn find_all(&self) -> AppResult<Vec<Package>> {
        sqlx::query_as::<_, Package>("SELECT * FROM packages ORDER BY price_addon ASC, name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list packages", e))
    }

    /// Insert a new package.
    pub async fn create(&self, data: &CreatePackage) -> AppResult<Package> {
        sqlx::query_as::<_, Package>(
            "INSERT INTO packages (name, description, price_addon) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price_addon)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_constraint_error(e, "Failed to create package"))
    }

    /// Apply a partial update to a package.
    pub async fn update(&self, id: Uuid, data: &UpdatePackage) -> AppResult<Package> {
        sqlx::query_as::<_, Package>(
            "UPDATE packages SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                price_addon = COALESCE($4, price_addon), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price_addon)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::map_constraint_error(e, "Failed to update package"))?
        .ok_or_else(|| AppError::not_found(format!("Package {id} not found")))
    }

    /// Delete a package. Bookings referencing it keep a null package
    /// (the FK is `ON DELETE SET NULL`).
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM packages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete package", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    fn map_constraint_error(e: sqlx::Error, context: &str) -> AppError {
        match &e {
            sqlx::Error::Database(db_err) if db_err.constraint() == Some("packages_name_key") => {
                AppError::conflict("A package with this name already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, context, e),
        }
    }
}
