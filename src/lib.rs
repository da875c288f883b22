//! # workshop-client
//!
//! Leptos + WASM frontend for the corpus workshop. Authenticates a user and
//! follows the server-driven pipeline (question generation, answering,
//! grading, tuning, evaluation) by polling the workshop REST API.
//!
//! Browser glue (fetch, `localStorage`, timers, the mount entry point) is
//! compiled only with the `csr` feature; native builds keep the same state
//! and network logic so it can be unit-tested with plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
