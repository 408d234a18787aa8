//! SessionDeck Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod events;
mod messages;
mod models;
mod storage;
mod store;
mod tree;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
