//! UI Components
//!
//! Reusable Leptos components.

mod catalog_form_dialog;
mod catalog_list;
mod catalog_select;
mod catalog_tab_bar;
mod catalogs_manager;
mod delete_confirm_button;
mod festive_decor;
mod maintenance_screen;
mod notifications_panel;
mod select_with_add;
mod theme_toggle;
pub mod toast;
mod top_bar;

pub use catalog_form_dialog::CatalogFormDialog;
pub use catalog_list::CatalogList;
pub use catalog_select::CatalogSelect;
pub use catalog_tab_bar::CatalogTabBar;
pub use catalogs_manager::CatalogsManager;
pub use delete_confirm_button::DeleteConfirmButton;
pub use maintenance_screen::MaintenanceScreen;
pub use notifications_panel::NotificationsPanel;
pub use select_with_add::{AddNewCallback, AddNewFuture, SelectWithAdd};
pub use theme_toggle::ThemeToggle;
pub use toast::{ToastViewport, Toasts};
pub use top_bar::TopBar;
