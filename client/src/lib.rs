//! # client
//!
//! Leptos + WASM frontend for VanaRaksha, the forest-conservation portal.
//!
//! This crate contains the landing page, the sign-in and sign-up flows, the
//! admin dashboard shell, and the session store they share. Flow and session
//! logic is framework-free so it runs under native unit tests; browser access
//! sits behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
