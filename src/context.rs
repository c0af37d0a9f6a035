//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::HttpCatalogApi;
use crate::catalog::CatalogStore;
use crate::config::AppConfig;

pub type SharedCatalogStore = Arc<CatalogStore<HttpCatalogApi>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after catalog mutations so views refetch - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after catalog mutations so views refetch - write
    set_reload_trigger: WriteSignal<u32>,
    catalogs: StoredValue<SharedCatalogStore>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let catalogs = Arc::new(CatalogStore::new(HttpCatalogApi::new(config.api_base.clone())));
        Self {
            reload_trigger,
            set_reload_trigger,
            catalogs: StoredValue::new(catalogs),
            config: StoredValue::new(config),
        }
    }

    /// Trigger a refetch of catalog views
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn catalogs(&self) -> SharedCatalogStore {
        self.catalogs.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn api_base(&self) -> String {
        self.config.with_value(|config| config.api_base.clone())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
