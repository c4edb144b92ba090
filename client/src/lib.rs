//! # intake-web
//!
//! Leptos + WASM front end for the hostel intake workflow: the fault-report
//! form and the image prediction widget.
//!
//! All interaction rules live in the `intake` crate. This crate binds them to
//! the DOM: it owns the reactive signals, reads picked files, performs the
//! `POST /predict` request, and renders the notices the state machines hand
//! back.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the client-side rendered build.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    leptos::mount::mount_to_body(app::App);
}
