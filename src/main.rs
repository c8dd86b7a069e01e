#![allow(warnings)]
//! Wish Wall Frontend Entry Point

mod browser;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    wasm_logger::init(wasm_logger::Config::new(level));
    mount_to_body(App);
}
