//! Simple TODO(s) Entry Point

mod app;
mod collection;
mod components;
mod grouping;
mod models;
mod storage;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
