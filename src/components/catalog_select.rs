//! Catalog Select Component
//!
//! A `SelectWithAdd` over the active items of one catalog kind, as used by
//! production forms. Kinds without a `code` can be extended inline.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::active_options;
use crate::components::{AddNewCallback, AddNewFuture, SelectWithAdd};
use crate::context::use_app_context;
use crate::models::{CatalogItem, CatalogKind, CatalogPayload};

#[component]
pub fn CatalogSelect(
    kind: CatalogKind,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (items, set_items) = signal(Vec::<CatalogItem>::new());
    let (selected, set_selected) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let store = ctx.catalogs();
        let generation = store.generation(kind);
        spawn_local(async move {
            let result = store.list(kind).await;
            // A newer reload is already on its way
            if store.generation(kind) != generation {
                return;
            }
            match result {
                Ok(loaded) => set_items.set(loaded),
                Err(e) => tracing::warn!(kind = kind.slug(), error = %e, "catalog select could not load options"),
            }
        });
    });

    let options = Signal::derive(move || active_options(&items.get()));

    // Areas need a code, which a single name field cannot provide
    let on_add_new: Option<AddNewCallback> = (!kind.requires_code()).then(|| {
        let callback: AddNewCallback = Arc::new(move |name: String| -> AddNewFuture {
            Box::pin(async move {
                let store = ctx.catalogs();
                let created = store
                    .create(kind, &CatalogPayload::named(name))
                    .await
                    .map_err(|e| e.to_string())?;
                set_selected.set(created.id.to_string());
                ctx.reload();
                Ok(())
            })
        });
        callback
    });

    view! {
        <div class="catalog-select">
            {label.map(|text| view! { <span class="form-label">{text}</span> })}
            <SelectWithAdd
                options=options
                value=selected
                on_value_change=move |value: String| set_selected.set(value)
                placeholder=format!("Seleccionar {}...", kind.title().to_lowercase())
                on_add_new=on_add_new
            />
        </div>
    }
}
