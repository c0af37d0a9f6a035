//! Theme Toggle Component
//!
//! Switches the `dark` class on the document element. The choice is kept in
//! the app store only and resets on reload.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

fn apply_theme_class(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if dark {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if let Err(e) = result {
        tracing::warn!(error = ?e, "failed to switch theme class");
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    let toggle = move |_| {
        let dark = !store.dark_theme().get_untracked();
        store.dark_theme().set(dark);
        apply_theme_class(dark);
    };

    view! {
        <button
            type="button"
            class="icon-btn theme-toggle"
            title=move || if store.dark_theme().get() { "Modo claro" } else { "Modo oscuro" }
            on:click=toggle
        >
            {move || if store.dark_theme().get() { "☀" } else { "🌙" }}
        </button>
    }
}
