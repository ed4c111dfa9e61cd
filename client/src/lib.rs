//! # client
//!
//! Leptos + WASM frontend for MealDash.
//!
//! This crate contains the app shell, route-level pages, presentational
//! components, auth session state, REST helpers and the form validation
//! schema. The server crate depends on it with the `ssr` feature to render
//! pages and to re-validate sign-up payloads with the same rules.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
