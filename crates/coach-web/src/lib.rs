//! Pro Coach Virtual Web Frontend
//!
//! Leptos-based WASM frontend: landing, pricing and login pages switched by
//! in-memory navigation state.

mod app;
mod components;
mod pages;
mod store;

pub use app::App;
pub use store::NavStore;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(App);
}
