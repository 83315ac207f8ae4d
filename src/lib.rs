//! Saki-Doruma - landing page
//!
//! Server-rendered marketing page for the Saki-Doruma expense manager,
//! hydrated with Leptos and WebAssembly: client-side login stored in
//! localStorage, toast notifications, scroll reveal and a nav spy.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
