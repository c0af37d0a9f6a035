//! Select With Add Component
//!
//! Searchable single-select with an optional "add new" entry that opens a
//! small dialog and hands the typed name to a caller-supplied async callback.
//! The caller owns the selected value and decides what a created entry means.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::choice::{filter_options, selected_label, toggle_selection, AddNewDialog};
use crate::components::toast::use_toasts;
use crate::models::ChoiceOption;

pub type AddNewFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Persists a new entry; receives the trimmed, non-empty name
pub type AddNewCallback = Arc<dyn Fn(String) -> AddNewFuture + Send + Sync>;

/// Searchable select with inline creation
///
/// Props:
/// - options: available label/value pairs
/// - value: currently selected value ("" = none)
/// - on_value_change: receives the new value; choosing the selected option again sends ""
/// - on_add_new: when present, enables the "add new" entry
#[component]
pub fn SelectWithAdd(
    #[prop(into)] options: Signal<Vec<ChoiceOption>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_value_change: Callback<String>,
    #[prop(into, default = "Seleccionar...".to_string())] placeholder: String,
    #[prop(into, default = "Buscar...".to_string())] search_placeholder: String,
    #[prop(into, default = "No se encontraron resultados.".to_string())] empty_text: String,
    #[prop(into, default = "Agregar nuevo".to_string())] add_new_label: String,
    #[prop(default = None)] on_add_new: Option<AddNewCallback>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let toasts = use_toasts();
    let can_add = on_add_new.is_some();
    let on_add_new = StoredValue::new(on_add_new);
    let search_placeholder = StoredValue::new(search_placeholder);
    let empty_text = StoredValue::new(empty_text);
    let add_new_label = StoredValue::new(add_new_label);

    let open = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let highlighted = RwSignal::new(0usize);
    let add_dialog = RwSignal::new(AddNewDialog::default());

    let filtered = Memo::new(move |_| filter_options(&options.get(), &query.get()));

    let close_popover = move || {
        open.set(false);
        query.set(String::new());
        highlighted.set(0);
    };

    let choose = move |chosen: String| {
        let next = toggle_selection(&value.get_untracked(), &chosen);
        on_value_change.run(next);
        close_popover();
    };

    let start_add_new = move || {
        close_popover();
        add_dialog.update(AddNewDialog::open);
    };

    let on_add_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(callback) = on_add_new.get_value() else { return };
        let mut name = None;
        add_dialog.update(|dialog| name = dialog.begin());
        // Blank input never reaches the callback
        let Some(name) = name else { return };

        spawn_local(async move {
            match callback(name).await {
                Ok(()) => {
                    add_dialog.update(AddNewDialog::succeed);
                    toasts.success("Elemento agregado correctamente");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "add-new callback failed");
                    add_dialog.update(AddNewDialog::fail);
                    toasts.error("Error al agregar elemento");
                }
            }
        });
    };

    let on_search_keydown = move |ev: web_sys::KeyboardEvent| {
        let count = filtered.with_untracked(Vec::len);
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                let sel = highlighted.get_untracked();
                if sel + 1 < count {
                    highlighted.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = highlighted.get_untracked();
                if sel > 0 {
                    highlighted.set(sel - 1);
                }
            }
            "Enter" => {
                ev.prevent_default();
                let picked = filtered.with_untracked(|items| {
                    items.get(highlighted.get_untracked()).map(|option| option.value.clone())
                });
                if let Some(picked) = picked {
                    choose(picked);
                }
            }
            "Escape" => close_popover(),
            _ => {}
        }
    };

    let trigger_text = move || {
        options.with(|opts| {
            value.with(|current| selected_label(opts, current).map(str::to_string))
        })
    };

    view! {
        <div class=format!("select-with-add {}", class)>
            <button
                type="button"
                role="combobox"
                class="select-trigger"
                aria-expanded=move || open.get().to_string()
                disabled=move || disabled.get().unwrap_or(false)
                on:click=move |_| {
                    if open.get_untracked() { close_popover() } else { open.set(true) }
                }
            >
                <span class="select-trigger-text">
                    {move || trigger_text().unwrap_or_else(|| placeholder.clone())}
                </span>
                <span class="select-chevrons">"⇅"</span>
            </button>

            <Show when=move || open.get()>
                <div class="select-dismiss" on:click=move |_| close_popover()></div>
                <div class="select-popover">
                    <input
                        type="text"
                        class="select-search"
                        placeholder=search_placeholder.get_value()
                        autocomplete="off"
                        autofocus=true
                        prop:value=move || query.get()
                        on:input=move |ev| {
                            query.set(event_target_value(&ev));
                            highlighted.set(0);
                        }
                        on:keydown=on_search_keydown
                    />
                    <div class="select-list" role="listbox">
                        {
                            move || {
                                let items = filtered.get();
                                if items.is_empty() {
                                    view! { <div class="select-empty">{empty_text.get_value()}</div> }.into_any()
                                } else {
                                    let current = value.get();
                                    let sel = highlighted.get();
                                    items.into_iter().enumerate().map(|(i, option)| {
                                        let is_selected = option.value == current;
                                        let item_class = if i == sel { "select-item highlighted" } else { "select-item" };
                                        let option_value = option.value.clone();
                                        view! {
                                            <button
                                                type="button"
                                                role="option"
                                                class=item_class
                                                aria-selected=is_selected.to_string()
                                                on:click=move |_| choose(option_value.clone())
                                            >
                                                <span class="select-check">{if is_selected { "✓" } else { "" }}</span>
                                                {option.label}
                                            </button>
                                        }
                                    }).collect_view().into_any()
                                }
                            }
                        }
                        <Show when=move || can_add>
                            <button type="button" class="select-item add-new" on:click=move |_| start_add_new()>
                                <span class="select-check">"+"</span>
                                {add_new_label.get_value()}
                            </button>
                        </Show>
                    </div>
                </div>
            </Show>

            <Show when=move || can_add && add_dialog.with(|dialog| dialog.open)>
                <div class="modal-backdrop" on:click=move |_| add_dialog.update(AddNewDialog::close)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <h3 class="modal-title">{add_new_label.get_value()}</h3>
                            <button class="close-btn" on:click=move |_| add_dialog.update(AddNewDialog::close)>"×"</button>
                        </div>
                        <form class="modal-form" on:submit=on_add_submit>
                            <label class="form-field">
                                <span class="form-label">"Nombre"</span>
                                <input
                                    type="text"
                                    placeholder="Ingrese el nombre"
                                    required=true
                                    prop:value=move || add_dialog.with(|dialog| dialog.input.clone())
                                    on:input=move |ev| add_dialog.update(|dialog| dialog.input = event_target_value(&ev))
                                />
                            </label>
                            <button
                                type="submit"
                                class="btn btn-primary btn-block"
                                disabled=move || add_dialog.with(|dialog| dialog.submitting)
                            >
                                {move || add_dialog.with(|dialog| dialog.submit_label())}
                            </button>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}
