//! # client
//!
//! Leptos + WASM administrative console for the hotel-management backend.
//!
//! This crate contains the persisted session store, the authenticated request
//! gateway, typed REST bindings, route guards, pages and components. The host
//! crate renders it on the server (`ssr`); the browser bundle hydrates it
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// Browser entry point: install console logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
