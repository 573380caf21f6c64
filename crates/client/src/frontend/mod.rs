//! Leptos frontend (browser build).

pub mod app;

use wasm_bindgen::prelude::*;

/// WASM entry point, called when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}
