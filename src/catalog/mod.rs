//! Catalog Domain
//!
//! Client-side handling of the three reference catalogs: the API seam, the
//! cached store, the create/edit dialog state and row presentation.

mod traits;
mod store;
mod dialog;
mod view;


pub use traits::CatalogApi;
pub use store::CatalogStore;
pub use dialog::CatalogDialog;
pub use view::{active_options, CatalogRow, ListState};
