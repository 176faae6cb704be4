//! Grocery Sync Frontend Entry Point

mod app;
mod components;
mod context;
mod error;
mod firebase;
mod i18n;
mod materialize;
mod models;
mod prefs;
mod store;
mod sync;
mod wake_lock;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
