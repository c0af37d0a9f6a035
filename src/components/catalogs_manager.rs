//! Catalogs Manager Component
//!
//! Admin card for the three reference catalogs: tabs, list, create/edit
//! dialog and delete. Every successful write invalidates the kind and
//! triggers a refetch; nothing is patched locally.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{CatalogDialog, ListState};
use crate::components::toast::use_toasts;
use crate::components::{CatalogFormDialog, CatalogList, CatalogSelect, CatalogTabBar};
use crate::context::use_app_context;
use crate::models::{CatalogItem, CatalogKind};

#[component]
pub fn CatalogsManager() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();

    let (active_kind, set_active_kind) = signal(CatalogKind::Areas);
    let (list_state, set_list_state) = signal(ListState::Loading);
    let dialog = RwSignal::new(None::<CatalogDialog>);
    let (deleting, set_deleting) = signal(None::<u32>);

    // Load the active kind on tab switch and after every mutation
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let kind = active_kind.get();
        let store = ctx.catalogs();
        tracing::debug!(kind = kind.slug(), trigger, "loading catalog list");

        if let Some(items) = store.cached(kind) {
            set_list_state.set(ListState::Loaded(items));
            return;
        }
        set_list_state.set(ListState::Loading);
        let generation = store.generation(kind);
        spawn_local(async move {
            let result = store.list(kind).await;
            // Tab switched, or a write landed, while the request was in flight
            if active_kind.get_untracked() != kind || store.generation(kind) != generation {
                return;
            }
            match result {
                Ok(items) => set_list_state.set(ListState::Loaded(items)),
                Err(e) => set_list_state.set(ListState::Failed(e.to_string())),
            }
        });
    });

    let retry = move |_: ()| {
        ctx.catalogs().invalidate(active_kind.get_untracked());
        ctx.reload();
    };

    let open_create = move |_| {
        dialog.set(Some(CatalogDialog::for_create(active_kind.get_untracked())));
    };

    let open_edit = move |item: CatalogItem| {
        dialog.set(Some(CatalogDialog::for_edit(active_kind.get_untracked(), item)));
    };

    let close_dialog = move |_: ()| dialog.set(None);

    let submit = move |_: ()| {
        let mut outcome = None;
        dialog.update(|d| {
            if let Some(d) = d {
                outcome = Some(d.begin_submit());
            }
        });
        // Validation errors are shown inside the dialog
        let Some(Ok(submission)) = outcome else { return };

        spawn_local(async move {
            let store = ctx.catalogs();
            match submission.send(&store).await {
                Ok(_) => {
                    toasts.success(submission.success_message());
                    dialog.update(|d| {
                        if d.as_ref().is_some_and(CatalogDialog::is_submitting) {
                            *d = None;
                        }
                    });
                    ctx.reload();
                }
                Err(e) => {
                    toasts.error(e.to_string());
                    dialog.update(|d| {
                        if let Some(d) = d {
                            d.fail(e.to_string());
                        }
                    });
                }
            }
        });
    };

    // Reached only through the inline confirmation
    let delete = move |id: u32| {
        if deleting.get_untracked().is_some() {
            return;
        }
        set_deleting.set(Some(id));
        let store = ctx.catalogs();
        let pending = store.request_delete(active_kind.get_untracked(), id);
        spawn_local(async move {
            match pending.confirm(&store).await {
                Ok(()) => {
                    toasts.success("Elemento eliminado correctamente");
                    ctx.reload();
                }
                Err(e) => toasts.error(e.to_string()),
            }
            set_deleting.set(None);
        });
    };

    view! {
        <section class="card catalogs-manager">
            <div class="card-header">
                <h2 class="card-title">"Gestión de Catálogos"</h2>
            </div>
            <div class="card-content">
                <CatalogTabBar active_kind=active_kind set_active_kind=set_active_kind />

                <div class="catalog-toolbar">
                    <h3 class="catalog-title">{move || active_kind.get().title()}</h3>
                    <button type="button" class="btn btn-primary" on:click=open_create>
                        "+ Agregar Nuevo"
                    </button>
                </div>

                <CatalogList
                    list_state=list_state
                    deleting=deleting
                    on_edit=open_edit
                    on_delete=delete
                    on_retry=retry
                />

                <div class="catalog-preview">
                    {move || {
                        let kind = active_kind.get();
                        view! { <CatalogSelect kind=kind label="Vista previa del selector" /> }
                    }}
                </div>
            </div>

            <CatalogFormDialog dialog=dialog on_submit=submit on_close=close_dialog />
        </section>
    }
}
