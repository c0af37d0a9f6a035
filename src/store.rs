//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Notification, PendingTransfer, User};
use crate::notifications::badge_count;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in user; polling only runs while this is set
    pub user: Option<User>,
    /// Transfers waiting on the user's area
    pub pending_transfers: Vec<PendingTransfer>,
    /// Unread reposition/completion notifications
    pub unread_notifications: Vec<Notification>,
    /// Seasonal decoration on/off
    pub festive_mode: bool,
    pub dark_theme: bool,
}

impl AppState {
    pub fn new(festive_mode: bool) -> Self {
        Self {
            festive_mode,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the session; dropping it also clears the polled counters
pub fn store_set_user(store: &AppStore, user: Option<User>) {
    if user.is_none() {
        store.pending_transfers().write().clear();
        store.unread_notifications().write().clear();
    }
    store.user().set(user);
}

/// Badge count from both polled sources
pub fn store_badge_count(store: &AppStore) -> usize {
    badge_count(
        store.pending_transfers().read().len(),
        store.unread_notifications().read().len(),
    )
}
