//! Notifications Panel Component
//!
//! Side panel opened from the bell; lists what the badge is counting.

use leptos::prelude::*;

use crate::notifications::{notification_heading, transfer_summary};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NotificationsPanel(
    open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();

    let is_empty = move || {
        store.pending_transfers().with(Vec::is_empty) && store.unread_notifications().with(Vec::is_empty)
    };

    view! {
        <Show when=move || open.get()>
            <div class="panel-backdrop" on:click=move |_| on_close.run(())></div>
            <aside class="notifications-panel">
                <div class="panel-header">
                    <h3 class="panel-title">"Notificaciones"</h3>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <Show
                    when=move || !is_empty()
                    fallback=|| view! { <p class="panel-empty">"No hay notificaciones pendientes"</p> }
                >
                    <Show when=move || !store.pending_transfers().with(Vec::is_empty)>
                        <h4 class="panel-section">"Transferencias pendientes"</h4>
                        <ul class="panel-list">
                            {move || store.pending_transfers().with(|transfers| {
                                transfers
                                    .iter()
                                    .map(|t| view! { <li class="panel-item">{transfer_summary(t)}</li> })
                                    .collect_view()
                            })}
                        </ul>
                    </Show>

                    <Show when=move || !store.unread_notifications().with(Vec::is_empty)>
                        <h4 class="panel-section">"Sin leer"</h4>
                        <ul class="panel-list">
                            {move || store.unread_notifications().with(|unread| {
                                unread
                                    .iter()
                                    .map(|n| {
                                        let heading = notification_heading(n);
                                        let message = n.message.clone();
                                        view! {
                                            <li class="panel-item">
                                                <strong>{heading}</strong>
                                                {message.map(|m| view! { <p class="panel-message">{m}</p> })}
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            })}
                        </ul>
                    </Show>
                </Show>
            </aside>
        </Show>
    }
}
