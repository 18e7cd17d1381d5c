//! FitVerse site controller, compiled to WASM.
//!
//! Owns the shared header state (user, cart, points), keeps it in
//! `localStorage`, renders the header widgets and hands off to the
//! page-specific manager for the current URL. Domain logic lives in `fv-core`;
//! this crate is the DOM and JS glue.

pub mod api;
pub mod cart;
pub mod config;
pub mod dom;
pub mod events;
pub mod notify;
pub mod pages;
pub mod render;
pub mod state;
pub mod style;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Startup sequence.
fn init() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    if window.document().is_none() {
        return Err(JsValue::from_str("no document"));
    }

    let config = config::load();
    style::inject_startup_styles(config.anti_shake);

    state::install(config);
    api::publish_global();
    render::update_ui();

    events::bind_navigation();

    pages::discover_managers();
    pages::initialize_current_page();

    events::bind_cart_icon();

    Ok(())
}
