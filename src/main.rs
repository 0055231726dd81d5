//! Notes Frontend Entry Point

mod actions;
mod api;
mod app;
mod board;
mod client;
mod components;
mod config;
mod context;
mod draft;
mod models;
mod notify;
mod store;
mod timestamp;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    mount_to_body(App);
}
