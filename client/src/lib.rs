//! # bikemarket-client
//!
//! Leptos + WASM frontend for the BikeMarket used-bike marketplace.
//!
//! This crate contains pages, components, the session store, form state,
//! the remote auth API client, and the static listing catalogue. The host
//! binary at the repository root server-renders [`app::App`] and the browser
//! hydrates it through [`hydrate`].

pub mod app;
pub mod catalogue;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
