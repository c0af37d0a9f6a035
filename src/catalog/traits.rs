//! Catalog API Seam
//!
//! Abstract interface for the catalog endpoints so the store can be driven by
//! the HTTP client in the browser and by an in-memory double in tests.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{CatalogItem, CatalogKind, CatalogPayload};

/// CRUD over one of the fixed catalog collections
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait CatalogApi {
    /// `GET /api/catalogs/{kind}`
    async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, ApiError>;

    /// `POST /api/catalogs/{kind}`
    async fn create(&self, kind: CatalogKind, payload: &CatalogPayload) -> Result<CatalogItem, ApiError>;

    /// `PUT /api/catalogs/{kind}/{id}`
    async fn update(&self, kind: CatalogKind, id: u32, payload: &CatalogPayload) -> Result<CatalogItem, ApiError>;

    /// `DELETE /api/catalogs/{kind}/{id}`
    async fn delete(&self, kind: CatalogKind, id: u32) -> Result<(), ApiError>;
}
