//! # brandforge
//!
//! Leptos + WASM frontend for the Brandforge AI content studio.
//! The backend is a separate HTTP service owning sessions and generation;
//! this crate owns the browser UI, the session-gated routing, and the thin
//! API client that talks to it.
//!
//! This crate contains pages, components, application state, network types,
//! and the pure route-guard logic. It compiles natively (no features) for
//! unit tests and to WASM with the `csr` feature for the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point. Installs panic/log hooks and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
