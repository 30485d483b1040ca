//! # voicelist-client
//!
//! Leptos + WASM frontend for Spotify Voice Manager: login, signup, and the
//! account dashboard, talking to the backend over a cookie-session REST API.
//!
//! This crate contains pages, components, client state, and the HTTP client
//! that carries session cookies and the CSRF token on every request.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly.
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("voicelist client hydrating");
    leptos::mount::hydrate_body(app::App);
}
