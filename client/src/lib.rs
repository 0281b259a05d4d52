//! # client
//!
//! Leptos + WASM frontend for the Brigade restaurant job board.
//!
//! `components` holds the presentational job-board pieces (skill badges,
//! highlight cards and grids, the job list screen, the job detail view).
//! `pages` are the thin hosts that fetch data, own side effects, and feed
//! those components through props and callbacks.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
