//! EasyTrack Admin App
//!
//! Shell: top bar, notifications panel and the catalogs manager.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::fetch_current_user;
use crate::components::{
    CatalogsManager, MaintenanceScreen, NotificationsPanel, ToastViewport, Toasts, TopBar,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_set_user, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    tracing::info!(api_base = %config.api_base, maintenance = config.maintenance_mode, "starting admin ui");

    if config.maintenance_mode {
        return view! { <MaintenanceScreen /> }.into_any();
    }

    let store: AppStore = Store::new(AppState::new(config.festive_default));
    let ctx = AppContext::new(config);
    provide_context(store);
    provide_context(ctx);
    provide_context(Toasts::new());

    let (notifications_open, set_notifications_open) = signal(false);

    // Load the session once on mount
    Effect::new(move |_| {
        let base = ctx.api_base();
        spawn_local(async move {
            match fetch_current_user(&base).await {
                Ok(user) => {
                    tracing::info!(signed_in = user.is_some(), "session loaded");
                    store_set_user(&store, user);
                }
                Err(e) => tracing::warn!(error = %e, "could not load session"),
            }
        });
    });

    view! {
        <div class="app-layout">
            <TopBar on_show_notifications=move |_| set_notifications_open.set(true) />
            <NotificationsPanel
                open=notifications_open
                on_close=move |_| set_notifications_open.set(false)
            />
            <main class="main-content">
                <CatalogsManager />
            </main>
            <ToastViewport />
        </div>
    }
    .into_any()
}
