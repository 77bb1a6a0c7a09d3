//! Product navigation for a company site.
//!
//! The centerpiece is [`ProductMegaMenu`](components::menu::mega_menu::ProductMegaMenu),
//! a hover mega menu listing product categories and their services. Picking
//! a service navigates to its category page and hands the selection to that
//! page through a [`SelectionRelay`](selection::SelectionRelay).

pub mod app;
pub mod blocks;
pub mod components;
pub mod errors;
pub mod routes;
pub mod selection;

/// Sends `log` output and panics to the browser console.
#[cfg(feature = "wasm")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("Browser logging already initialized: {e}");
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    init_browser_logging();
    leptos::mount::hydrate_body(app::App);
}
