//! Pokédex Frontend Entry Point

mod models;
mod config;
mod error;
mod api;
mod filter;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::LevelFilter::Debug) {
        console_logger::emit(log::Level::Error, &format!("[MAIN] Logger init failed: {}", e));
    }
    mount_to_body(App);
}
