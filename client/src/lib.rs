//! Scribbled Canvas portfolio front end.
//!
//! ARCHITECTURE
//! ============
//! - `store` is the Content Store: remote content service with a mandatory
//!   local mirror.
//! - `state` holds the Session/Role Guard and the page states.
//! - `pages` and `components` render routes from context-provided signals.
//!
//! The crate builds twice: with `ssr` for the host server's shell and route
//! list, and with `hydrate` as the WASM bundle that runs in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod store;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
