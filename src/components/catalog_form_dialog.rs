//! Catalog Form Dialog Component
//!
//! Modal form for creating or editing one catalog item. All field state lives
//! in the `CatalogDialog` held by the parent; closing drops it.

use leptos::prelude::*;

use crate::catalog::CatalogDialog;

#[component]
pub fn CatalogFormDialog(
    dialog: RwSignal<Option<CatalogDialog>>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    // Read a field of the open dialog, or a default while closed
    let field = move |read: fn(&CatalogDialog) -> String| {
        dialog.with(|d| d.as_ref().map(read).unwrap_or_default())
    };
    let flag = move |read: fn(&CatalogDialog) -> bool| dialog.with(|d| d.as_ref().is_some_and(read));
    let edit = move |apply: Box<dyn FnOnce(&mut CatalogDialog)>| {
        dialog.update(|d| {
            if let Some(d) = d {
                apply(d);
            }
        });
    };

    view! {
        <Show when=move || dialog.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">{move || field(|d| d.title())}</h3>
                        <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                    <form
                        class="modal-form"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            on_submit.run(());
                        }
                    >
                        <Show when=move || flag(CatalogDialog::shows_code)>
                            <label class="form-field">
                                <span class="form-label">"Código"</span>
                                <input
                                    type="text"
                                    placeholder="ej: corte"
                                    required=true
                                    disabled=move || !flag(CatalogDialog::code_editable)
                                    prop:value=move || field(|d| d.draft().code.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        edit(Box::new(move |d| d.set_code(value)));
                                    }
                                />
                            </label>
                        </Show>
                        <label class="form-field">
                            <span class="form-label">"Nombre"</span>
                            <input
                                type="text"
                                placeholder="Nombre del elemento"
                                required=true
                                prop:value=move || field(|d| d.draft().name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit(Box::new(move |d| d.set_name(value)));
                                }
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-label">"Descripción"</span>
                            <textarea
                                placeholder="Descripción opcional"
                                prop:value=move || field(|d| d.draft().description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit(Box::new(move |d| d.set_description(value)));
                                }
                            ></textarea>
                        </label>
                        <label class="form-field">
                            <span class="form-label">"Orden de visualización"</span>
                            <input
                                type="number"
                                prop:value=move || field(|d| d.draft().display_order.to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit(Box::new(move |d| d.set_display_order_input(&value)));
                                }
                            />
                        </label>
                        <label class="form-switch">
                            <input
                                type="checkbox"
                                role="switch"
                                prop:checked=move || flag(|d| d.draft().is_active)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    edit(Box::new(move |d| d.set_active(checked)));
                                }
                            />
                            <span>"Activo"</span>
                        </label>
                        {move || dialog.with(|d| d.as_ref().and_then(|d| d.error().map(str::to_string)))
                            .map(|message| view! { <p class="form-error" role="alert">{message}</p> })}
                        <button
                            type="submit"
                            class="btn btn-primary btn-block"
                            disabled=move || flag(CatalogDialog::is_submitting)
                        >
                            {move || field(|d| d.submit_label().to_string())}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
