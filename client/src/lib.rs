//! # client
//!
//! Leptos frontend for the portfolio site, rendered on the server and
//! hydrated in the browser.
//!
//! Content is static (`content`); the only interactive piece is the mobile
//! navigation disclosure (`state::disclosure`, `components::site_header`).

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
