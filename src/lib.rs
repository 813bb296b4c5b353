//! # barbershop-client
//!
//! Leptos + WASM frontend for a barbershop scheduling service. Renders the
//! login screen and the provider dashboard (day schedule plus calendar
//! picker) against the remote booking API.
//!
//! This crate contains pages, components, the persisted session handle,
//! route guarding, and the schedule view model. All browser I/O lives
//! behind the `hydrate` feature; SSR builds render markup only.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod schedule;
pub mod session;

/// Hydrate entry point invoked by the generated JS shim in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
