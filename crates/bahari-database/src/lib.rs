//! # bahari-database
//!
//! PostgreSQL access layer: connection pool management, migration runner,
//! and one repository per aggregate. Repositories are thin structs over
//! `PgPool`; every query maps its error into the unified `AppError`.

pub mod connection;
pub mod migration;
pub mod repositories;
