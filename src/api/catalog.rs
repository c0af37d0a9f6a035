//! Catalog Endpoints
//!
//! `fetch` implementation of [`CatalogApi`].

use async_trait::async_trait;

use super::{delete_json, get_json, post_json, put_json};
use crate::catalog::CatalogApi;
use crate::error::ApiError;
use crate::models::{CatalogItem, CatalogKind, CatalogPayload};

/// Catalog client bound to an API origin
#[derive(Debug, Clone, Default)]
pub struct HttpCatalogApi {
    base: String,
}

impl HttpCatalogApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn collection_url(&self, kind: CatalogKind) -> String {
        format!("{}{}", self.base, kind.collection_path())
    }

    fn item_url(&self, kind: CatalogKind, id: u32) -> String {
        format!("{}{}", self.base, kind.item_path(id))
    }
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, ApiError> {
        get_json(&self.collection_url(kind)).await
    }

    async fn create(&self, kind: CatalogKind, payload: &CatalogPayload) -> Result<CatalogItem, ApiError> {
        post_json(&self.collection_url(kind), payload).await
    }

    async fn update(&self, kind: CatalogKind, id: u32, payload: &CatalogPayload) -> Result<CatalogItem, ApiError> {
        put_json(&self.item_url(kind, id), payload).await
    }

    async fn delete(&self, kind: CatalogKind, id: u32) -> Result<(), ApiError> {
        // Body is a confirmation object we have no use for
        let _: serde_json::Value = delete_json(&self.item_url(kind, id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_follow_kind_table() {
        let api = HttpCatalogApi::new("https://easytrack.local");
        assert_eq!(
            api.collection_url(CatalogKind::DamageCausers),
            "https://easytrack.local/api/catalogs/damage-causers"
        );
        assert_eq!(
            api.item_url(CatalogKind::Areas, 12),
            "https://easytrack.local/api/catalogs/areas/12"
        );
        assert_eq!(HttpCatalogApi::default().collection_url(CatalogKind::AccidentTypes), "/api/catalogs/accident-types");
    }
}
