//! Catalog Tab Bar Component
//!
//! Tabs for switching the active catalog kind.

use leptos::prelude::*;

use crate::models::CatalogKind;

/// One tab per catalog kind, in fixed order
#[component]
pub fn CatalogTabBar(
    active_kind: ReadSignal<CatalogKind>,
    set_active_kind: WriteSignal<CatalogKind>,
) -> impl IntoView {
    view! {
        <div class="catalog-tab-bar" role="tablist">
            {CatalogKind::ALL.into_iter().map(|kind| {
                let is_active = move || active_kind.get() == kind;
                view! {
                    <button
                        type="button"
                        role="tab"
                        class=move || if is_active() { "catalog-tab active" } else { "catalog-tab" }
                        aria-selected=move || is_active().to_string()
                        on:click=move |_| set_active_kind.set(kind)
                    >
                        {kind.title()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
