//! Catalog List Component
//!
//! Rows of the active catalog in server order, with loading/error/empty states.

use leptos::prelude::*;

use crate::catalog::{CatalogRow, ListState};
use crate::components::DeleteConfirmButton;
use crate::models::CatalogItem;

#[component]
pub fn CatalogList(
    list_state: ReadSignal<ListState>,
    /// Item whose DELETE is in flight
    deleting: ReadSignal<Option<u32>>,
    #[prop(into)] on_edit: Callback<CatalogItem>,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    move || match list_state.get() {
        ListState::Loading => view! { <p class="catalog-status">"Cargando..."</p> }.into_any(),
        ListState::Failed(message) => view! {
            <div class="catalog-status error" role="alert">
                <span>{message}</span>
                <button type="button" class="btn btn-ghost" on:click=move |_| on_retry.run(())>
                    "Reintentar"
                </button>
            </div>
        }.into_any(),
        ListState::Loaded(items) if items.is_empty() => {
            view! { <p class="catalog-status">"No hay elementos registrados"</p> }.into_any()
        }
        ListState::Loaded(items) => view! {
            <div class="catalog-list">
                <For
                    each=move || items.clone()
                    key=|item| item.id
                    children=move |item| {
                        view! { <CatalogRowView item=item deleting=deleting on_edit=on_edit on_delete=on_delete /> }
                    }
                />
            </div>
        }.into_any(),
    }
}

#[component]
fn CatalogRowView(
    item: CatalogItem,
    deleting: ReadSignal<Option<u32>>,
    on_edit: Callback<CatalogItem>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let row = CatalogRow::from_item(&item);
    let id = row.id;
    let heading = row.heading();

    view! {
        <div class="catalog-row">
            <div class="catalog-row-main">
                <div class="catalog-row-heading">
                    <span class="catalog-row-name" title=heading>{row.name}</span>
                    {row.code_suffix.map(|suffix| view! { <span class="catalog-row-code">{suffix}</span> })}
                    {row.inactive_badge.map(|badge| view! { <span class="badge badge-inactive">{badge}</span> })}
                </div>
                {row.description.map(|text| view! { <p class="catalog-row-description">{text}</p> })}
            </div>
            <div class="catalog-row-actions">
                <button
                    type="button"
                    class="btn btn-ghost"
                    title="Editar"
                    on:click=move |_| on_edit.run(item.clone())
                >
                    "✎"
                </button>
                <DeleteConfirmButton
                    button_class="btn btn-ghost danger"
                    disabled=Signal::derive(move || deleting.get() == Some(id))
                    on_confirm=move |_| on_delete.run(id)
                />
            </div>
        </div>
    }
}
