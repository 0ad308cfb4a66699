//! # wms-client
//!
//! Leptos + WASM frontend for the warehouse-management system.
//!
//! This crate contains the session store and route guard that gate every
//! page, the client-side route table, typed wrappers for the WMS REST API,
//! role-based UI permissions, and the pages that tie them together.
//!
//! Build for the browser with the `csr` feature; without it the HTTP and
//! storage layers compile to inert stubs so the state logic can be tested
//! natively.

pub mod app;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

/// Browser entry point: logging, panic hook, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::mount_to_body(app::App);
}
