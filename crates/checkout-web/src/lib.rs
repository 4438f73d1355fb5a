//! Deposit checkout web frontend
//!
//! Leptos-based WASM frontend hosting the embedded card checkout.

mod api;
mod app;
mod components;
mod pages;
mod sdk;
mod theme;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
