//! Error Types
//!
//! Transport errors from the HTTP layer and the user-facing catalog errors
//! they are folded into. `Display` of the catalog errors is the toast text.

use thiserror::Error;

/// Failure talking to the HTTP API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// Response arrived but was not 2xx
    #[error("HTTP {status}")]
    Status { status: u16 },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 })
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Catalog operation failure, one variant per operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Error al cargar catálogo")]
    Load(#[source] ApiError),
    #[error("Error al crear elemento")]
    Create(#[source] ApiError),
    #[error("Error al actualizar elemento")]
    Update(#[source] ApiError),
    #[error("Error al eliminar elemento")]
    Delete(#[source] ApiError),
}

/// Draft validation, raised before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("El nombre es obligatorio")]
    NameRequired,
    #[error("El código es obligatorio")]
    CodeRequired,
    #[error("Ya se está guardando")]
    AlreadySubmitting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_messages() {
        let status = ApiError::Status { status: 500 };
        assert_eq!(CatalogError::Load(status.clone()).to_string(), "Error al cargar catálogo");
        assert_eq!(CatalogError::Create(status.clone()).to_string(), "Error al crear elemento");
        assert_eq!(CatalogError::Update(status.clone()).to_string(), "Error al actualizar elemento");
        assert_eq!(CatalogError::Delete(status.clone()).to_string(), "Error al eliminar elemento");
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::Status { status: 401 }.is_unauthorized());
        assert!(!ApiError::Status { status: 403 }.is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }
}
