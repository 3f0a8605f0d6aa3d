//! # plantdesk
//!
//! Leptos + WASM client for a manufacturing-operations admin suite:
//! role-gated dashboards (admin, NPD, purchase, sales, stores, planning,
//! production, quality) over a cookie-session REST backend.
//!
//! The crate compiles natively with no features so unit tests run without a
//! browser; the `csr` feature enables the real runtime (fetch, storage,
//! mounting).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic reporting + console logging, then
/// mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
