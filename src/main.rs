//! EasyTrack Admin UI Entry Point

mod api;
mod app;
mod catalog;
mod choice;
mod components;
mod config;
mod context;
mod decor;
mod error;
mod identity;
mod models;
mod notifications;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
