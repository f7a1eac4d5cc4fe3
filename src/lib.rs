//! # runway-client
//!
//! Leptos + WASM frontend for the runway pageant application.
//!
//! All of the client's decision logic lives in two places: the session store
//! (`session`), which owns the persisted bearer token and the header bundle
//! attached to authenticated API calls, and the navigation guard (`routing`),
//! which gates every route transition on that token. Pages and the API layer
//! stay declarative and delegate to those two modules.

pub mod app;
pub mod net;
pub mod pages;
pub mod routing;
pub mod session;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
