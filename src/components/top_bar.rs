//! Top Bar Component
//!
//! Greeting, festive toggle, theme toggle, notification bell and the profile
//! menu. Also owns the two notification polls; both only run while a user is
//! logged in.

use chrono::Timelike;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_poll::{use_poll, PollOptions};

use crate::api::{fetch_pending_transfers, fetch_unread_notifications, logout};
use crate::components::festive_decor::{PineRows, Snowfall};
use crate::components::toast::use_toasts;
use crate::components::ThemeToggle;
use crate::context::use_app_context;
use crate::decor::light_chars;
use crate::identity::{area_color, area_display_name, greeting_line, teams_chat_link, user_initials};
use crate::notifications::badge_label;
use crate::store::{store_badge_count, store_set_user, use_app_store, AppStateStoreFields};

#[component]
pub fn TopBar(#[prop(into)] on_show_notifications: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let toasts = use_toasts();
    let config = ctx.config();

    let signed_in = Signal::derive(move || store.user().with(Option::is_some));
    let poll = PollOptions::every(config.poll_interval);

    {
        let base = config.api_base.clone();
        use_poll(poll, signed_in, move || {
            let base = base.clone();
            spawn_local(async move {
                let transfers = fetch_pending_transfers(&base).await;
                // Logged out while in flight
                if store.user().with_untracked(Option::is_some) {
                    store.pending_transfers().set(transfers);
                }
            });
        });
    }
    {
        let base = config.api_base.clone();
        use_poll(poll, signed_in, move || {
            let base = base.clone();
            spawn_local(async move {
                let unread = fetch_unread_notifications(&base).await;
                if store.user().with_untracked(Option::is_some) {
                    store.unread_notifications().set(unread);
                }
            });
        });
    }

    let (menu_open, set_menu_open) = signal(false);
    let (profile_open, set_profile_open) = signal(false);
    let (logging_out, set_logging_out) = signal(false);

    let user_name = move || store.user().with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let user_area = move || store.user().with(|u| u.as_ref().and_then(|u| u.area.clone()).unwrap_or_default());
    let username = move || store.user().with(|u| u.as_ref().map(|u| u.username.clone()).unwrap_or_default());

    let greeting = move || greeting_line(chrono::Local::now().hour(), &user_name());
    let festive = move || store.festive_mode().get();

    let toggle_festive = move |_| store.festive_mode().update(|on| *on = !*on);

    let do_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        set_logging_out.set(true);
        let base = ctx.api_base();
        spawn_local(async move {
            match logout(&base).await {
                Ok(()) => {
                    tracing::info!("logged out");
                    set_menu_open.set(false);
                    store_set_user(&store, None);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "logout failed");
                    toasts.error("Error al cerrar sesión");
                }
            }
            set_logging_out.set(false);
        });
    };

    view! {
        <header class=move || if festive() { "top-bar festive" } else { "top-bar" }>
            <Show when=festive>
                <Snowfall />
                <PineRows />
            </Show>

            <div class="top-bar-inner">
                <div class="top-bar-greeting">
                    <h1 class="greeting">
                        {move || {
                            let text = greeting();
                            if festive() {
                                light_chars(&text)
                                    .into_iter()
                                    .map(|c| view! { <span class="light-char">{c.to_string()}</span> })
                                    .collect_view()
                                    .into_any()
                            } else {
                                text.into_any()
                            }
                        }}
                    </h1>
                    <p class="greeting-area">{move || area_display_name(&user_area()).to_string()}</p>
                </div>

                <div class="top-bar-actions">
                    <button
                        type="button"
                        class=move || if festive() { "icon-btn festive-toggle active" } else { "icon-btn festive-toggle" }
                        title=move || if festive() { "Desactivar modo navideño" } else { "Activar modo navideño" }
                        on:click=toggle_festive
                    >
                        "🎄"
                    </button>

                    <ThemeToggle />

                    <button
                        type="button"
                        class="icon-btn bell"
                        title="Notificaciones"
                        on:click=move |_| on_show_notifications.run(())
                    >
                        "🔔"
                        {move || badge_label(store_badge_count(&store))
                            .map(|label| view! { <span class="badge">{label}</span> })}
                    </button>

                    <div class="profile">
                        <button
                            type="button"
                            class="avatar-btn"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <Show when=festive>
                                <span class="avatar-hat">"🎅"</span>
                            </Show>
                            <span
                                class="avatar"
                                style=move || format!("background-color: {};", area_color(&user_area()))
                            >
                                {move || user_initials(&user_name())}
                            </span>
                        </button>

                        <Show when=move || menu_open.get()>
                            <div class="menu-dismiss" on:click=move |_| set_menu_open.set(false)></div>
                            <div class="profile-menu" role="menu">
                                <div class="profile-menu-label">
                                    <p class="profile-name">{user_name}</p>
                                    <p class="profile-username">{username}</p>
                                    <span
                                        class="area-badge"
                                        style=move || format!("background-color: {};", area_color(&user_area()))
                                    >
                                        {move || area_display_name(&user_area()).to_string()}
                                    </span>
                                </div>
                                <hr class="menu-separator" />
                                <button
                                    type="button"
                                    class="menu-item"
                                    on:click=move |_| {
                                        set_menu_open.set(false);
                                        set_profile_open.set(true);
                                    }
                                >
                                    "👤 Perfil"
                                </button>
                                <a class="menu-item" href=move || teams_chat_link(&username())>
                                    "💬 Abrir Teams"
                                </a>
                                <hr class="menu-separator" />
                                <button
                                    type="button"
                                    class="menu-item danger"
                                    disabled=move || logging_out.get()
                                    on:click=do_logout
                                >
                                    "⎋ Cerrar Sesión"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>

            <Show when=move || profile_open.get()>
                <div class="modal-backdrop" on:click=move |_| set_profile_open.set(false)>
                    <div class="modal profile-card" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <h3 class="modal-title">"Perfil"</h3>
                            <button class="close-btn" on:click=move |_| set_profile_open.set(false)>"×"</button>
                        </div>
                        <div class="profile-card-body">
                            <span
                                class="avatar avatar-lg"
                                style=move || format!("background-color: {};", area_color(&user_area()))
                            >
                                {move || user_initials(&user_name())}
                            </span>
                            <p class="profile-name">{user_name}</p>
                            <p class="profile-username">{username}</p>
                            <p class="profile-area">{move || area_display_name(&user_area()).to_string()}</p>
                        </div>
                    </div>
                </div>
            </Show>
        </header>
    }
}
