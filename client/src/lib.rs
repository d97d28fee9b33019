//! # client
//!
//! Leptos frontend for the 11 Fitness marketing site: a single page of
//! sequential sections rendered on the server and hydrated in the browser.
//!
//! `content` holds the static catalogs, `state` the per-section UI models,
//! `components` and `pages` the views, and `net` the contact submission
//! boundary.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed (hot reload).
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::debug!("hydrating {}", content::brand::NAME);
    }
    leptos::mount::hydrate_body(app::App);
}
