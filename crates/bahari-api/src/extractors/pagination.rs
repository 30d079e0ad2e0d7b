//! Pagination query parameter extractor.

use axum::extract::FromRequestParts;
use axum::extract::Query;
use axum::http::request::Parts;
use serde::Deserialize;

use bahari_core::error::AppError;
use bahari_core::types::pagination::PageRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// Raw pagination query parameters.
#[derive(Debug, Clone, Deserialize)]
struct RawPagination {
    page: Option<u64>,
    page_size: Option<u64>,
}

/// Extracted and clamped pagination parameters.
#[derive(Debug, Clone)]
pub struct PaginationParams(pub PageRequest);

impl std::ops::Deref for PaginationParams {
    type Target = PageRequest;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for PaginationParams {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawPagination>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError(AppError::validation(format!("Invalid pagination: {e}"))))?;

        let defaults = PageRequest::default();
        Ok(PaginationParams(PageRequest::new(
            raw.page.unwrap_or(defaults.page),
            raw.page_size.unwrap_or(defaults.page_size),
        )))
    }
}
